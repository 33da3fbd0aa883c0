//! # Galactic Tarot
//!
//! An animated particle galaxy that draws tarot readings.
//!
//! About fifteen thousand stars orbit a pulsing core. Drawing a card (by
//! keyboard, overlay button, or a pinch gesture) sends a handful of
//! messenger stars flying toward the camera while the rest keep orbiting.
//! After a short resolution delay the whole field condenses into a
//! card-shaped lattice and the reading appears; dismissing it returns every
//! star to its orbit.
//!
//! ## Quick Start
//!
//! ```ignore
//! use galactic_tarot::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     galactic_tarot::run(SceneConfig::new().with_language(Language::En))
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Modes
//!
//! The scene is always in exactly one [`Mode`]:
//!
//! - `Galaxy` - stars orbit the core and drift back to their galaxy targets
//! - `Drawing` - messengers fly toward the camera, the rest keep orbiting
//! - `Card` - the reading is on screen; nebula and core are frozen or hidden
//!
//! A reading exists if and only if the mode is `Card`.
//!
//! ### Driving without a window
//!
//! [`Session`] owns the scene, the mode machine, the reading resolver and the
//! sensors, and takes time as plain seconds. Tests and benchmarks drive it
//! directly:
//!
//! ```ignore
//! let content = ContentTable::embedded()?;
//! let mut session = Session::with_seed(SceneConfig::new(), content, Sensors::unavailable(), 0.0, 7);
//! session.draw_card("star", 0.0);
//! for frame in 1..=150 {
//!     session.frame(frame as f32 / 60.0);
//! }
//! assert_eq!(session.mode(), Mode::Card);
//! ```
//!
//! ### Gestures
//!
//! Hand tracking is pluggable through the [`sensors::Camera`] and
//! [`sensors::GestureRecognizer`] traits. Without them the scene runs in
//! pointer-only mode.
//!
//! ## Feature Flags
//!
//! - `egui` - draw the HUD (title, status, reading card, help) with egui

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod galaxy;
pub mod gesture;
pub mod gpu;
pub mod i18n;
pub mod input;
pub mod mode;
pub mod reading;
pub mod rotation;
pub mod scene;
pub mod sensors;
pub mod session;
pub mod textures;
pub mod time;
#[cfg(feature = "egui")]
pub mod ui;
pub mod window;

pub use glam::{Vec2, Vec3};
pub use mode::Mode;
pub use session::Session;
pub use window::run;

/// Convenient re-exports for typical use.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::SceneConfig;
    pub use crate::error::AppError;
    pub use crate::gesture::Gesture;
    pub use crate::input::Action;
    pub use crate::mode::Mode;
    pub use crate::reading::{ContentTable, Language, Reading};
    pub use crate::sensors::Sensors;
    pub use crate::session::Session;
    pub use glam::{Vec2, Vec3};
}
