//! Yaw/pitch rotation of the whole galaxy.

use glam::Vec2;

/// Yaw velocity the galaxy drifts back to when nothing steers it.
pub const AMBIENT_YAW_VELOCITY: f32 = 0.002;
/// Per-frame blend toward the ambient drift.
pub const DRIFT_RECOVERY: f32 = 0.02;
/// Radians of velocity per pixel of pointer drag.
pub const DRAG_SENSITIVITY: f32 = 0.005;
/// Per-event blend toward the drag velocity.
pub const DRAG_RESPONSE: f32 = 0.2;
/// Yaw velocity at the edge of the camera frame while steering with a palm.
pub const STEER_GAIN: f32 = -0.18;
/// Per-poll blend toward the steering velocity.
pub const STEER_RESPONSE: f32 = 0.06;

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rotation angles and their velocities, integrated once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub yaw: f32,
    pub pitch: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blend velocities toward a pointer drag of `delta` pixels.
    pub fn drag(&mut self, delta: Vec2) {
        self.yaw_velocity = lerp(
            self.yaw_velocity,
            delta.x * DRAG_SENSITIVITY,
            DRAG_RESPONSE,
        );
        self.pitch_velocity = lerp(
            self.pitch_velocity,
            delta.y * DRAG_SENSITIVITY,
            DRAG_RESPONSE,
        );
    }

    /// Steer yaw from a palm at normalized horizontal position `x`.
    ///
    /// A palm left of center spins one way, right of center the other.
    pub fn steer(&mut self, x: f32) {
        self.yaw_velocity = lerp(self.yaw_velocity, (x - 0.5) * STEER_GAIN, STEER_RESPONSE);
    }

    /// Integrate one frame.
    ///
    /// While the pointer is held the velocities are left alone; otherwise
    /// they relax toward the ambient drift.
    pub fn advance(&mut self, pointer_held: bool) {
        if !pointer_held {
            self.yaw_velocity = lerp(self.yaw_velocity, AMBIENT_YAW_VELOCITY, DRIFT_RECOVERY);
            self.pitch_velocity = lerp(self.pitch_velocity, 0.0, DRIFT_RECOVERY);
        }
        self.yaw += self.yaw_velocity;
        self.pitch += self.pitch_velocity;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            yaw_velocity: AMBIENT_YAW_VELOCITY,
            pitch_velocity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_blends_velocity() {
        let mut rotation = RotationState::new();
        rotation.drag(Vec2::new(50.0, 0.0));
        let expected = 0.002 + (0.25 - 0.002) * 0.2;
        assert!((rotation.yaw_velocity - expected).abs() < 1e-6);
        assert_eq!(rotation.pitch_velocity, 0.0);

        rotation.drag(Vec2::new(0.0, -20.0));
        assert!((rotation.pitch_velocity - (-0.1 * 0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_steer_direction() {
        let mut left = RotationState::new();
        left.steer(0.0);
        assert!(left.yaw_velocity > AMBIENT_YAW_VELOCITY);

        let mut right = RotationState::new();
        right.steer(1.0);
        assert!(right.yaw_velocity < 0.0);

        let mut center = RotationState::new();
        center.yaw_velocity = 0.0;
        center.steer(0.5);
        assert_eq!(center.yaw_velocity, 0.0);
    }

    #[test]
    fn test_advance_recovers_ambient_drift() {
        let mut rotation = RotationState::new();
        rotation.yaw_velocity = 0.3;
        rotation.pitch_velocity = -0.1;
        for _ in 0..1_000 {
            rotation.advance(false);
        }
        assert!((rotation.yaw_velocity - AMBIENT_YAW_VELOCITY).abs() < 1e-5);
        assert!(rotation.pitch_velocity.abs() < 1e-5);
    }

    #[test]
    fn test_advance_while_held_keeps_velocity() {
        let mut rotation = RotationState::new();
        rotation.yaw_velocity = 0.1;
        rotation.advance(true);
        assert_eq!(rotation.yaw_velocity, 0.1);
        assert!((rotation.yaw - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_ambient_drift_integrates() {
        let mut rotation = RotationState::new();
        for _ in 0..10 {
            rotation.advance(false);
        }
        assert!((rotation.yaw - 0.02).abs() < 1e-5);
        assert_eq!(rotation.pitch, 0.0);
    }
}
