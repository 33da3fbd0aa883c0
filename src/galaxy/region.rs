//! Radial regions of the galaxy and their generation strategies.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

use rand::Rng;

use crate::color::Color;

/// Upper bound (exclusive) of the core region's progress value.
pub const CORE_LIMIT: f32 = 0.15;
/// Upper bound (exclusive) of the mid region's progress value.
pub const MID_LIMIT: f32 = 0.5;

/// Colors the regions blend between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub core: Color,
    pub accent: Color,
    pub galaxy: Color,
}

/// Where along the spiral a particle sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Hexagonal bright core.
    Core,
    /// Purple-accented inner arms.
    Mid,
    /// Faint blue outer arms.
    Rim,
}

impl Region {
    /// Classify a progress value `t` in `[0, 1)`.
    pub fn classify(t: f32) -> Self {
        if t < CORE_LIMIT {
            Region::Core
        } else if t < MID_LIMIT {
            Region::Mid
        } else {
            Region::Rim
        }
    }

    /// Planar `(x, z)` position before jitter.
    pub fn place<R: Rng + ?Sized>(self, angle: f32, dist: f32, rng: &mut R) -> (f32, f32) {
        match self {
            Region::Core => {
                let radius = dist * hex_factor(angle) * (0.96 + rng.gen::<f32>() * 0.08);
                (angle.cos() * radius, angle.sin() * radius * 0.55)
            }
            Region::Mid | Region::Rim => (angle.cos() * dist, angle.sin() * dist * 0.48),
        }
    }

    /// Base size of a regular (non-beacon) star.
    ///
    /// The exponent grows outward so faint far stars vastly outnumber bright
    /// near ones.
    pub fn base_size<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        let u: f32 = rng.gen();
        match self {
            Region::Core => 0.6 + u.powf(2.8) * 3.0,
            Region::Mid => 0.3 + u.powf(3.5) * 2.0,
            Region::Rim => 0.2 + u.powf(4.0) * 1.8,
        }
    }

    /// Color of a regular (non-beacon) star.
    pub fn color<R: Rng + ?Sized>(self, palette: &Palette, rng: &mut R) -> Color {
        match self {
            Region::Core => palette.core.lerp(Color::WHITE, rng.gen::<f32>() * 0.4),
            Region::Mid => palette.accent.offset_hsl(
                rng.gen::<f32>() * 0.1 - 0.05,
                0.2,
                rng.gen::<f32>() * 0.2 - 0.1,
            ),
            Region::Rim => palette.galaxy.offset_hsl(
                rng.gen::<f32>() * 0.12 - 0.06,
                -0.1,
                rng.gen::<f32>() * 0.25 - 0.12,
            ),
        }
    }
}

/// Radius multiplier that bends a circle into a hexagon.
///
/// Within each 60° sector the radius follows `sec(local angle)`, which traces
/// a straight edge; each edge is stretched by a side-dependent factor so the
/// hexagon looks hand-drawn rather than regular.
pub fn hex_factor(angle: f32) -> f32 {
    let local = angle.rem_euclid(FRAC_PI_3) - FRAC_PI_6;
    let side = (angle / FRAC_PI_3).floor();
    let stretch = 0.88 + ((side * 4.2).sin() * 0.5 + 0.5) * 0.25;
    stretch / local.cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Region::classify(0.0), Region::Core);
        assert_eq!(Region::classify(0.149), Region::Core);
        assert_eq!(Region::classify(0.15), Region::Mid);
        assert_eq!(Region::classify(0.499), Region::Mid);
        assert_eq!(Region::classify(0.5), Region::Rim);
        assert_eq!(Region::classify(0.999), Region::Rim);
    }

    #[test]
    fn test_hex_factor_edges_and_corners() {
        // Sector 0 has no stretch beyond the base 0.88 + 0.125.
        let base = 0.88 + 0.5 * 0.25;
        let mid_edge = hex_factor(FRAC_PI_6);
        assert!((mid_edge - base).abs() < 1e-5);

        // Corners sit further out than edge midpoints (sec(30°) ≈ 1.1547).
        let corner = hex_factor(1e-4);
        assert!((corner / base - 1.0 / FRAC_PI_6.cos()).abs() < 1e-3);
    }

    #[test]
    fn test_core_placement_is_flattened_ellipse() {
        let mut rng = StdRng::seed_from_u64(1);
        for i in 0..200 {
            let angle = i as f32 * 0.07;
            let (x, z) = Region::Core.place(angle, 10.0, &mut rng);
            let radius = (x * x + (z / 0.55) * (z / 0.55)).sqrt();
            // dist * stretch * sec * jitter stays within these bounds.
            assert!(radius >= 10.0 * 0.88 * 0.96 - 1e-3, "radius {radius}");
            assert!(radius <= 10.0 * 1.13 * 1.1548 * 1.04 + 1e-3, "radius {radius}");
        }
    }

    #[test]
    fn test_arm_placement_is_exact_ellipse() {
        let mut rng = StdRng::seed_from_u64(2);
        let (x, z) = Region::Rim.place(0.0, 100.0, &mut rng);
        assert!((x - 100.0).abs() < 1e-4);
        assert!(z.abs() < 1e-4);

        let (x, z) = Region::Mid.place(std::f32::consts::FRAC_PI_2, 50.0, &mut rng);
        assert!(x.abs() < 1e-4);
        assert!((z - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_size_ranges_by_region() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let core = Region::Core.base_size(&mut rng);
            assert!((0.6..=3.6).contains(&core));
            let mid = Region::Mid.base_size(&mut rng);
            assert!((0.3..=2.3).contains(&mid));
            let rim = Region::Rim.base_size(&mut rng);
            assert!((0.2..=2.0).contains(&rim));
        }
    }

    #[test]
    fn test_core_color_stays_between_core_and_white() {
        let palette = Palette {
            core: Color::from_hex(0xFFCC00),
            accent: Color::from_hex(0x9900FF),
            galaxy: Color::from_hex(0x4466FF),
        };
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let c = Region::Core.color(&palette, &mut rng);
            assert_eq!(c.r, 1.0);
            assert!(c.g >= 0.8 - 1e-6 && c.g <= 0.92 + 1e-6);
            assert!(c.b <= 0.4 + 1e-6);
        }
    }
}
