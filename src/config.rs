//! Scene configuration.
//!
//! There are no config files: everything is a compile-time default that can
//! be overridden with the builder methods before the scene starts.
//!
//! ```ignore
//! use galactic_tarot::prelude::*;
//!
//! let config = SceneConfig::new()
//!     .with_particle_count(8_000)
//!     .with_nebula_intensity(0.3)
//!     .with_language(Language::En);
//! ```

use crate::color::Color;
use crate::reading::Language;

/// Tunables for the galaxy and its animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Number of particles in the field.
    pub particle_count: usize,
    /// Multiplier applied to every particle's base size.
    pub size_scale: f32,
    /// Color of the core region and the beacon stars.
    pub core_color: Color,
    /// Color of the outer spiral arms.
    pub galaxy_color: Color,
    /// Fixed accent hue of the mid region.
    pub accent_color: Color,
    /// Nebula haze strength; 0.15 gives the reference opacity.
    pub nebula_intensity: f32,
    /// How much faster inner particles orbit than outer ones.
    pub accretion_speed: f32,
    /// Frequency of the core flare pulse.
    pub flare_freq: f32,
    /// Language of the UI and the readings at startup.
    pub language: Language,
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_size_scale(mut self, scale: f32) -> Self {
        self.size_scale = scale;
        self
    }

    pub fn with_core_color(mut self, color: Color) -> Self {
        self.core_color = color;
        self
    }

    pub fn with_galaxy_color(mut self, color: Color) -> Self {
        self.galaxy_color = color;
        self
    }

    pub fn with_nebula_intensity(mut self, intensity: f32) -> Self {
        self.nebula_intensity = intensity.max(0.0);
        self
    }

    pub fn with_accretion_speed(mut self, speed: f32) -> Self {
        self.accretion_speed = speed;
        self
    }

    pub fn with_flare_freq(mut self, freq: f32) -> Self {
        self.flare_freq = freq;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 15_000,
            size_scale: 0.6,
            core_color: Color::from_hex(0xFFCC00),
            galaxy_color: Color::from_hex(0x4466FF),
            accent_color: Color::from_hex(0x9900FF),
            nebula_intensity: 0.15,
            accretion_speed: 1.8,
            flare_freq: 0.4,
            language: Language::Cn,
        }
    }
}
