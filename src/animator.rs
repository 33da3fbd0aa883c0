//! Per-frame particle animation.
//!
//! Each frame every particle eases toward the target of the current mode,
//! then the eased position is spun by the differential (accretion) rotation,
//! tilted by the shared pitch, and bobbed vertically. The eased position is
//! the only state carried between frames; the rotated result goes straight
//! into the render buffer.

use glam::{Vec2, Vec3};

use crate::config::SceneConfig;
use crate::mode::Mode;
use crate::rotation::RotationState;
use crate::scene::Scene;

/// Fraction of the remaining distance covered each frame.
pub const SMOOTHING: f32 = 0.08;
/// Seconds a messenger takes to reach its flight target.
pub const FLIGHT_DURATION: f32 = 1.6;
/// Light intensity with no flare.
pub const BASE_LIGHT: f32 = 600.0;
/// Additional light intensity at full flare.
pub const FLARE_LIGHT: f32 = 1500.0;
/// Nebula group rotation relative to the galaxy rotation.
pub const NEBULA_ROTATION_FACTOR: f32 = 0.15;

/// Periodic core flare in `[0, 1]`.
///
/// The pulse only fires near the crest of the sine wave, so most of the
/// time it is zero.
pub fn flare(time: f32, freq: f32) -> f32 {
    ((time * freq * 12.0).sin() - 0.75).max(0.0) * 4.0
}

/// Messenger flight interpolation factor at `now` for a flight that began
/// at `started_at`.
pub fn flight_progress(now: f32, started_at: f32) -> f32 {
    ((now - started_at) / FLIGHT_DURATION).clamp(0.0, 1.0)
}

/// Core scale at `time`; zero while the card is shown.
pub fn core_scale(time: f32, flare: f32, mode: Mode) -> f32 {
    if mode == Mode::Card {
        return 0.0;
    }
    1.0 + (time * 4.5).sin() * 0.12 + flare * 0.25
}

/// Everything the animator reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Seconds since startup.
    pub time: f32,
    pub mode: Mode,
    /// Start of the current DRAWING phase, if drawing.
    pub drawing_since: Option<f32>,
    pub rotation: RotationState,
}

/// Uniform values produced by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub time: f32,
    pub flare: f32,
    pub light_intensity: f32,
    pub core_scale: f32,
    pub core_visible: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Animator {
    accretion_speed: f32,
    flare_freq: f32,
}

impl Animator {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            accretion_speed: config.accretion_speed,
            flare_freq: config.flare_freq,
        }
    }

    /// Advance `scene` by one frame.
    pub fn step(&self, scene: &mut Scene, input: &FrameInput) -> FrameOutput {
        let flare = flare(input.time, self.flare_freq);
        let card = input.mode == Mode::Card;
        let progress = input
            .drawing_since
            .filter(|_| input.mode == Mode::Drawing)
            .map(|since| flight_progress(input.time, since));

        let (points, nebula) = scene.members_mut();

        if let Some(points) = points {
            let (particles, positions, output) = points.parts_mut();
            let (pitch_sin, pitch_cos) = input.rotation.pitch.sin_cos();

            for ((p, pos), out) in particles.iter().zip(positions.iter_mut()).zip(output.iter_mut()) {
                let target = match (input.mode, progress) {
                    (Mode::Card, _) => p.card_target,
                    (Mode::Drawing, Some(t)) if p.is_messenger => {
                        p.galaxy_target.lerp(p.flight_target, t)
                    }
                    _ => p.galaxy_target,
                };
                *pos += (target - *pos) * SMOOTHING;

                let mut v = *pos;
                if !card {
                    let rate = (1.2 + (1.2 - p.distance_ratio) * self.accretion_speed) * p.mass;
                    let (s, c) = (input.rotation.yaw * rate).sin_cos();
                    let x = v.x * c - v.z * s;
                    let z = v.x * s + v.z * c;
                    let y = v.y * pitch_cos - z * pitch_sin;
                    let z = v.y * pitch_sin + z * pitch_cos;
                    v = Vec3::new(x, y, z);
                }
                v.y += (input.time * 2.8 + p.seed).sin() * 0.25
                    + flare * (1.0 - p.distance_ratio) * 2.8;
                *out = v;
            }
            points.mark_dirty();
        }

        if let (Some(group), false) = (nebula, card) {
            for sprite in &mut group.sprites {
                sprite.pulse(flare);
            }
            group.rotation = Vec2::new(input.rotation.pitch, input.rotation.yaw)
                * NEBULA_ROTATION_FACTOR;
        }

        FrameOutput {
            time: input.time,
            flare,
            light_intensity: BASE_LIGHT + flare * FLARE_LIGHT,
            core_scale: core_scale(input.time, flare, input.mode),
            core_visible: !card,
        }
    }
}
