//! Error types for Galactic Tarot.
//!
//! Only startup failures (no GPU, no window, corrupt embedded content) are
//! fatal. Everything that can go wrong while the galaxy is running is
//! recoverable and degrades the experience instead of halting it.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Error, Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,

    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors raised while loading the tarot content table.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The JSON document is malformed.
    #[error("Malformed content table: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry carries an energy level above the five-pip scale.
    #[error("Card '{card}' has energy {energy}, expected 0..=5")]
    EnergyOutOfRange { card: String, energy: u8 },

    /// A language has no entries at all.
    #[error("No entries for language '{0}'")]
    EmptyLanguage(&'static str),

    /// The deck lists no cards.
    #[error("The deck is empty")]
    EmptyDeck,
}

/// Errors raised while resolving a reading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    /// Neither the requested card nor the fallback card has an entry.
    #[error("No entry for card '{card}' and no '{fallback}' fallback")]
    MissingEntry { card: String, fallback: &'static str },
}

/// Errors from the camera and the gesture recognizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The user (or the platform) refused camera access.
    #[error("Camera access denied")]
    PermissionDenied,

    /// No camera device is present.
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    /// The recognition engine could not be initialized.
    #[error("Gesture recognizer unavailable: {0}")]
    RecognizerUnavailable(String),

    /// A single recognition call failed.
    #[error("Gesture recognition failed: {0}")]
    Recognition(String),
}

/// Errors that can occur when running the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to create event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),

    /// The embedded content table could not be loaded.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}
