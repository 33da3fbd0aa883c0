//! Procedural sprite textures.
//!
//! Stars and nebula haze are drawn as camera-facing quads masked by a soft
//! radial gradient. Both masks are generated here as plain RGBA bitmaps; the
//! renderer uploads them once at startup.
//!
//! # Example
//!
//! ```ignore
//! use galactic_tarot::textures;
//!
//! let star = textures::star_sprite();
//! assert_eq!((star.width, star.height), (64, 64));
//! ```

use image::{Rgba, RgbaImage};

/// Filter mode for texture sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Smooth linear filtering (default). Good for gradients.
    #[default]
    Linear,
    /// Sharp nearest-neighbor filtering.
    Nearest,
}

/// One color stop of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Distance from the center, as a fraction of the radius.
    pub offset: f32,
    /// Alpha at this stop.
    pub alpha: f32,
}

impl GradientStop {
    pub const fn new(offset: f32, alpha: f32) -> Self {
        Self { offset, alpha }
    }
}

/// Alpha stops of the star point sprite.
pub const STAR_STOPS: [GradientStop; 4] = [
    GradientStop::new(0.0, 1.0),
    GradientStop::new(0.2, 0.8),
    GradientStop::new(0.4, 0.2),
    GradientStop::new(1.0, 0.0),
];

/// Alpha stops of the nebula haze.
pub const NEBULA_STOPS: [GradientStop; 3] = [
    GradientStop::new(0.0, 0.2),
    GradientStop::new(0.6, 0.05),
    GradientStop::new(1.0, 0.0),
];

/// A generated texture ready for upload.
#[derive(Debug, Clone)]
pub struct TextureConfig {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Filter mode for magnification/minification.
    pub filter: FilterMode,
}

impl TextureConfig {
    /// Create a texture configuration from raw RGBA data.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
            filter: FilterMode::Linear,
        }
    }

    /// Create a white square texture whose alpha falls off radially.
    ///
    /// The gradient is centered on the texture and reaches its last stop at
    /// the inscribed circle; pixels outside it take the last stop's alpha.
    pub fn radial_gradient(size: u32, stops: &[GradientStop]) -> Self {
        let radius = size as f32 / 2.0;
        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = gradient_alpha(stops, t);
            Rgba([255, 255, 255, (alpha * 255.0).round() as u8])
        });
        Self::from_rgba(image.into_raw(), size, size)
    }

    /// Alpha of the pixel at `(x, y)`, in `0.0..=1.0`.
    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        let index = ((y * self.width + x) * 4 + 3) as usize;
        self.data[index] as f32 / 255.0
    }
}

/// The 64x64 point-sprite mask used by every star.
pub fn star_sprite() -> TextureConfig {
    TextureConfig::radial_gradient(64, &STAR_STOPS)
}

/// The 128x128 haze mask used by nebula sprites.
pub fn nebula_haze() -> TextureConfig {
    TextureConfig::radial_gradient(128, &NEBULA_STOPS)
}

/// Piecewise-linear alpha at normalized distance `t`.
pub fn gradient_alpha(stops: &[GradientStop], t: f32) -> f32 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    if t <= first.offset {
        return first.alpha;
    }
    if t >= last.offset {
        return last.alpha;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = (b.offset - a.offset).max(f32::EPSILON);
            return a.alpha + (b.alpha - a.alpha) * (t - a.offset) / span;
        }
    }
    last.alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_alpha_at_stops() {
        assert_eq!(gradient_alpha(&STAR_STOPS, 0.0), 1.0);
        assert!((gradient_alpha(&STAR_STOPS, 0.2) - 0.8).abs() < 1e-6);
        assert!((gradient_alpha(&STAR_STOPS, 0.3) - 0.5).abs() < 1e-6);
        assert_eq!(gradient_alpha(&STAR_STOPS, 1.5), 0.0);
        assert_eq!(gradient_alpha(&[], 0.5), 0.0);
    }

    #[test]
    fn test_star_sprite_shape() {
        let star = star_sprite();
        assert_eq!(star.width, 64);
        assert_eq!(star.data.len(), 64 * 64 * 4);

        // Bright center, transparent corners.
        assert!(star.alpha_at(32, 32) > 0.9);
        assert_eq!(star.alpha_at(0, 0), 0.0);
        assert_eq!(star.alpha_at(63, 63), 0.0);
    }

    #[test]
    fn test_nebula_haze_is_faint() {
        let haze = nebula_haze();
        assert_eq!(haze.width, 128);
        let center = haze.alpha_at(64, 64);
        assert!(center > 0.15 && center <= 0.2 + 1e-3);
        assert_eq!(haze.alpha_at(0, 64), 0.0);
    }

    #[test]
    fn test_gradient_is_symmetric() {
        let star = star_sprite();
        assert_eq!(star.alpha_at(10, 32), star.alpha_at(53, 32));
        assert_eq!(star.alpha_at(32, 10), star.alpha_at(32, 53));
    }
}
