//! Fixed perspective camera looking at the galaxy center.

use glam::{Mat4, Vec3};

/// Perspective camera. The galaxy itself rotates; the camera never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            fov_y: 35.0,
            position: Vec3::new(0.0, 65.0, 260.0),
            target: Vec3::ZERO,
            near: 1.0,
            far: 8000.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projection for a viewport of the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect.max(1e-3), self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
