//! The scene graph: one point cloud and one nebula group.
//!
//! Regenerating the galaxy replaces both members in a single
//! [`Scene::install`] call. The generation counter lets the renderer notice
//! the swap and rebuild its GPU buffers.

use glam::{Vec2, Vec3};

use crate::galaxy::{GalaxyField, NebulaSprite, Particle};

/// Particles plus the render-side position buffer the animator writes.
#[derive(Debug, Clone)]
pub struct PointCloud {
    particles: Vec<Particle>,
    positions: Vec<Vec3>,
    output: Vec<Vec3>,
    size_scale: f32,
    dirty: bool,
}

impl PointCloud {
    fn new(particles: Vec<Particle>, size_scale: f32) -> Self {
        let positions: Vec<Vec3> = particles.iter().map(Particle::initial_position).collect();
        let output = positions.clone();
        Self {
            particles,
            positions,
            output,
            size_scale,
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size_scale(&self) -> f32 {
        self.size_scale
    }

    /// Current (unrotated) positions, the animator's persistent state.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Rotated, displaced positions as they should be drawn.
    pub fn rendered(&self) -> &[Vec3] {
        &self.output
    }

    /// Split borrows for the animator: static particles, current positions,
    /// and the render buffer.
    pub(crate) fn parts_mut(&mut self) -> (&[Particle], &mut [Vec3], &mut [Vec3]) {
        (&self.particles, &mut self.positions, &mut self.output)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Nebula sprites and the group rotation shared by all of them.
#[derive(Debug, Clone)]
pub struct NebulaGroup {
    pub sprites: Vec<NebulaSprite>,
    /// Euler `(x, y)` rotation of the group.
    pub rotation: Vec2,
}

impl NebulaGroup {
    fn new(sprites: Vec<NebulaSprite>) -> Self {
        Self {
            sprites,
            rotation: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    points: Option<PointCloud>,
    nebula: Option<NebulaGroup>,
    generation: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current members with `field`.
    pub fn install(&mut self, field: GalaxyField) {
        let previous = self.points.as_ref().map_or(0, PointCloud::len);
        self.points = Some(PointCloud::new(field.particles, field.size_scale));
        self.nebula = Some(NebulaGroup::new(field.nebula));
        self.generation += 1;
        log::info!(
            "scene generation {}: {} particles (was {}), {} nebula sprites",
            self.generation,
            self.points.as_ref().map_or(0, PointCloud::len),
            previous,
            self.nebula.as_ref().map_or(0, |n| n.sprites.len()),
        );
    }

    /// Number of attached members (point cloud and nebula group).
    pub fn member_count(&self) -> usize {
        usize::from(self.points.is_some()) + usize::from(self.nebula.is_some())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn points(&self) -> Option<&PointCloud> {
        self.points.as_ref()
    }

    pub fn points_mut(&mut self) -> Option<&mut PointCloud> {
        self.points.as_mut()
    }

    pub fn nebula(&self) -> Option<&NebulaGroup> {
        self.nebula.as_ref()
    }

    pub fn nebula_mut(&mut self) -> Option<&mut NebulaGroup> {
        self.nebula.as_mut()
    }

    /// Both members at once, for the animator.
    pub(crate) fn members_mut(&mut self) -> (Option<&mut PointCloud>, Option<&mut NebulaGroup>) {
        (self.points.as_mut(), self.nebula.as_mut())
    }
}
