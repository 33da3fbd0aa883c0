//! Procedural galaxy generation.
//!
//! Every static attribute of every particle is computed here, once per
//! (re)initialization: the three shape targets the animator blends between,
//! the per-particle phase and rotation parameters, and the render color and
//! size. A sparse subset of particles also spawns soft nebula sprites.
//!
//! Generation is deterministic only by distribution. Pass a seeded RNG for
//! reproducible fields:
//!
//! ```ignore
//! use rand::{rngs::StdRng, SeedableRng};
//! use galactic_tarot::{config::SceneConfig, galaxy};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let field = galaxy::generate(&SceneConfig::default(), &mut rng);
//! assert_eq!(field.len(), 15_000);
//! ```

mod region;

pub use region::{hex_factor, Palette, Region, CORE_LIMIT, MID_LIMIT};

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use crate::color::Color;
use crate::config::SceneConfig;

/// Particles `0..MESSENGER_COUNT` fly toward the camera while drawing.
pub const MESSENGER_COUNT: usize = 500;
/// Columns of the card lattice.
pub const CARD_COLUMNS: usize = 40;
/// Rows of the card lattice.
pub const CARD_ROWS: usize = 45;
/// Distance between neighboring lattice points.
pub const CARD_SPACING: f32 = 1.1;
/// Particles beyond the lattice are pushed this far out while a card shows.
pub const CARD_FALLBACK_SCALE: f32 = 6.5;
/// Particles start slightly outside their galaxy target and settle inward.
pub const INITIAL_SCALE: f32 = 1.05;
/// Every `NEBULA_STRIDE`-th particle hosts a nebula sprite.
pub const NEBULA_STRIDE: usize = 400;
/// Particles at or past this index never host nebula sprites.
pub const NEBULA_LIMIT: usize = 15_000;
/// Probability that a particle is a beacon star.
pub const BEACON_CHANCE: f32 = 0.07;

/// Inner progress values are resampled outward with this probability.
const INNER_RESAMPLE_CHANCE: f32 = 0.4;
const INNER_RESAMPLE_LIMIT: f32 = 0.12;

/// Static attributes of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub galaxy_target: Vec3,
    pub card_target: Vec3,
    pub flight_target: Vec3,
    /// Phase offset of the vertical bob, in `[0, 300)`.
    pub seed: f32,
    /// Rotation speed multiplier, in `[0.15, 1.0)`.
    pub mass: f32,
    /// Progress along the spiral, in `[0, 1)`.
    pub distance_ratio: f32,
    pub is_messenger: bool,
    pub is_beacon: bool,
    pub region: Region,
    pub color: Color,
    pub base_size: f32,
}

impl Particle {
    /// Where the particle sits before its first animated frame.
    pub fn initial_position(&self) -> Vec3 {
        self.galaxy_target * INITIAL_SCALE
    }
}

/// A soft haze sprite anchored on a host particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NebulaSprite {
    pub position: Vec3,
    pub color: Color,
    pub base_opacity: f32,
    pub base_scale: f32,
    /// Opacity after the latest flare modulation.
    pub opacity: f32,
    /// Scale after the latest flare modulation.
    pub scale: f32,
}

impl NebulaSprite {
    fn new(position: Vec3, color: Color, base_opacity: f32, base_scale: f32) -> Self {
        Self {
            position,
            color,
            base_opacity,
            base_scale,
            opacity: base_opacity,
            scale: base_scale,
        }
    }

    /// Brighten and swell the sprite with the core flare.
    pub fn pulse(&mut self, flare: f32) {
        self.opacity = self.base_opacity * (1.0 + flare * 0.4);
        self.scale = self.base_scale * (1.0 + flare * 0.08);
    }
}

/// The output of one generation pass.
#[derive(Debug, Clone)]
pub struct GalaxyField {
    pub particles: Vec<Particle>,
    pub nebula: Vec<NebulaSprite>,
    /// Multiplier from base size to rendered size.
    pub size_scale: f32,
}

impl GalaxyField {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Size of particle `index` as drawn.
    pub fn rendered_size(&self, index: usize) -> f32 {
        self.particles[index].base_size * self.size_scale
    }
}

/// Lattice point `index` of the card, row-major, or `None` past the lattice.
pub fn card_lattice(index: usize) -> Option<Vec3> {
    if index >= CARD_COLUMNS * CARD_ROWS {
        return None;
    }
    let col = (index % CARD_COLUMNS) as f32;
    let row = (index / CARD_COLUMNS) as f32;
    let half_w = (CARD_COLUMNS as f32 - 1.0) / 2.0;
    let half_h = (CARD_ROWS as f32 - 1.0) / 2.0;
    Some(Vec3::new(
        (col - half_w) * CARD_SPACING,
        (row - half_h) * CARD_SPACING,
        0.0,
    ))
}

/// Generate a full field for `config`.
pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> GalaxyField {
    let palette = Palette {
        core: config.core_color,
        accent: config.accent_color,
        galaxy: config.galaxy_color,
    };
    let nebula_opacity = 0.06 * config.nebula_intensity / 0.15;

    let mut particles = Vec::with_capacity(config.particle_count);
    let mut nebula = Vec::with_capacity(config.particle_count.min(NEBULA_LIMIT) / NEBULA_STRIDE + 1);

    for i in 0..config.particle_count {
        let particle = generate_particle(i, &palette, rng);

        if i % NEBULA_STRIDE == 0 && i < NEBULA_LIMIT {
            let scale = 40.0 + rng.gen::<f32>() * 60.0;
            let tint = particle
                .color
                .offset_hsl(rng.gen::<f32>() * 0.2 - 0.1, 0.1, 0.0)
                .scale(0.8);
            nebula.push(NebulaSprite::new(
                particle.galaxy_target,
                tint,
                nebula_opacity,
                scale,
            ));
        }

        particles.push(particle);
    }

    GalaxyField {
        particles,
        nebula,
        size_scale: config.size_scale,
    }
}

fn generate_particle<R: Rng + ?Sized>(index: usize, palette: &Palette, rng: &mut R) -> Particle {
    let mut t: f32 = rng.gen();
    if t < INNER_RESAMPLE_LIMIT && rng.gen::<f32>() < INNER_RESAMPLE_CHANCE {
        t = INNER_RESAMPLE_LIMIT + rng.gen::<f32>() * (1.0 - INNER_RESAMPLE_LIMIT);
    }

    let dist = 5.0 + t * 160.0;
    let arm = if index % 2 == 0 { 0.0 } else { PI };
    let angle = t * 5.2 * PI + arm;

    let region = Region::classify(t);
    let (x, z) = region.place(angle, dist, rng);

    let spread = dist * 0.2;
    let galaxy_target = Vec3::new(
        x + (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * 18.0 * (1.0 - t),
        z + (rng.gen::<f32>() - 0.5) * spread,
    );

    let is_beacon = rng.gen::<f32>() < BEACON_CHANCE;
    let (base_size, color) = if is_beacon {
        let size = 2.0 + rng.gen::<f32>() * 5.0;
        let color = palette.core.lerp(Color::WHITE, rng.gen::<f32>() * 0.7);
        (size, color)
    } else {
        (region.base_size(rng), region.color(palette, rng))
    };

    let card_target =
        card_lattice(index).unwrap_or(galaxy_target * CARD_FALLBACK_SCALE);
    let flight_target = Vec3::new(
        (rng.gen::<f32>() - 0.5) * 60.0,
        (rng.gen::<f32>() - 0.5) * 60.0,
        450.0,
    );

    Particle {
        galaxy_target,
        card_target,
        flight_target,
        seed: rng.gen::<f32>() * 300.0,
        mass: 0.15 + rng.gen::<f32>() * 0.85,
        distance_ratio: t,
        is_messenger: index < MESSENGER_COUNT,
        is_beacon,
        region,
        color,
        base_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(count: usize, seed: u64) -> GalaxyField {
        let config = SceneConfig::default().with_particle_count(count);
        generate(&config, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_particle_count_matches_config() {
        for count in [0, 1, 401, 2_000] {
            assert_eq!(field(count, 1).len(), count);
        }
        assert!(field(0, 1).is_empty());
    }

    #[test]
    fn test_messengers_are_first_500() {
        let f = field(1_000, 2);
        for (i, p) in f.particles.iter().enumerate() {
            assert_eq!(p.is_messenger, i < MESSENGER_COUNT, "index {i}");
        }
    }

    #[test]
    fn test_card_lattice_corners() {
        assert_eq!(card_lattice(0), Some(Vec3::new(-19.5 * 1.1, -22.0 * 1.1, 0.0)));
        let last = card_lattice(CARD_COLUMNS * CARD_ROWS - 1).unwrap();
        assert!((last.x - 19.5 * 1.1).abs() < 1e-5);
        assert!((last.y - 22.0 * 1.1).abs() < 1e-5);
        assert_eq!(card_lattice(CARD_COLUMNS * CARD_ROWS), None);
        // Row-major: index 40 starts the second row.
        let second_row = card_lattice(CARD_COLUMNS).unwrap();
        assert!((second_row.y - (-21.0 * 1.1)).abs() < 1e-5);
    }

    #[test]
    fn test_card_targets_past_lattice_scale_galaxy() {
        let f = field(2_000, 3);
        for (i, p) in f.particles.iter().enumerate() {
            if i < CARD_COLUMNS * CARD_ROWS {
                assert_eq!(Some(p.card_target), card_lattice(i));
            } else {
                assert_eq!(p.card_target, p.galaxy_target * CARD_FALLBACK_SCALE);
            }
        }
    }

    #[test]
    fn test_attribute_ranges() {
        let f = field(3_000, 4);
        for p in &f.particles {
            assert!((0.0..300.0).contains(&p.seed));
            assert!((0.15..1.0).contains(&p.mass));
            assert!((0.0..1.0).contains(&p.distance_ratio));
            assert_eq!(p.flight_target.z, 450.0);
            assert!(p.flight_target.x.abs() <= 30.0);
            assert_eq!(p.region, Region::classify(p.distance_ratio));
            if p.is_beacon {
                assert!((2.0..=7.0).contains(&p.base_size));
            }
            // Vertical spread shrinks toward the rim.
            assert!(p.galaxy_target.y.abs() <= 9.0 * (1.0 - p.distance_ratio) + 1e-4);
        }
    }

    #[test]
    fn test_inner_resampling_thins_core() {
        let f = field(15_000, 5);
        let inner = f
            .particles
            .iter()
            .filter(|p| p.distance_ratio < INNER_RESAMPLE_LIMIT)
            .count() as f32;
        // Expected share is 0.12 * 0.6 = 7.2% instead of 12%.
        let share = inner / 15_000.0;
        assert!(share > 0.06 && share < 0.085, "share {share}");
    }

    #[test]
    fn test_beacon_share() {
        let f = field(15_000, 6);
        let beacons = f.particles.iter().filter(|p| p.is_beacon).count() as f32;
        let share = beacons / 15_000.0;
        assert!(share > 0.06 && share < 0.08, "share {share}");
    }

    #[test]
    fn test_nebula_stride() {
        assert_eq!(field(15_000, 7).nebula.len(), 38);
        assert_eq!(field(401, 7).nebula.len(), 2);
        // Particles past the limit never spawn sprites.
        assert_eq!(field(20_000, 7).nebula.len(), 38);
    }

    #[test]
    fn test_nebula_follows_host_and_intensity() {
        let config = SceneConfig::default()
            .with_particle_count(800)
            .with_nebula_intensity(0.3);
        let f = generate(&config, &mut StdRng::seed_from_u64(8));
        assert_eq!(f.nebula[0].position, f.particles[0].galaxy_target);
        assert_eq!(f.nebula[1].position, f.particles[400].galaxy_target);
        for sprite in &f.nebula {
            assert!((sprite.base_opacity - 0.12).abs() < 1e-6);
            assert!((40.0..=100.0).contains(&sprite.base_scale));
            assert_eq!(sprite.opacity, sprite.base_opacity);
        }
    }

    #[test]
    fn test_nebula_pulse() {
        let mut sprite = NebulaSprite::new(Vec3::ZERO, Color::WHITE, 0.06, 50.0);
        sprite.pulse(1.0);
        assert!((sprite.opacity - 0.084).abs() < 1e-6);
        assert!((sprite.scale - 54.0).abs() < 1e-4);
        sprite.pulse(0.0);
        assert_eq!(sprite.opacity, 0.06);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = field(500, 9);
        let b = field(500, 9);
        assert_eq!(a.particles, b.particles);
        assert_ne!(a.particles, field(500, 10).particles);
    }

    #[test]
    fn test_initial_position_and_rendered_size() {
        let f = field(10, 11);
        let p = f.particles[3];
        assert_eq!(p.initial_position(), p.galaxy_target * 1.05);
        assert!((f.rendered_size(3) - p.base_size * 0.6).abs() < 1e-6);
    }
}
