//! UV sphere geometry for the core and its glow shell.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    /// Position on the unit sphere; doubles as the outward normal.
    pub position: [f32; 3],
}

/// Vertices and triangle indices of a unit sphere.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a sphere with `segments` around the equator and `rings` from
    /// pole to pole. Triangles wind counter-clockwise seen from outside.
    pub fn new(segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        for iy in 0..=rings {
            let v = iy as f32 / rings as f32;
            let (sin_v, cos_v) = (v * std::f32::consts::PI).sin_cos();
            for ix in 0..=segments {
                let u = ix as f32 / segments as f32;
                let (sin_u, cos_u) = (u * std::f32::consts::TAU).sin_cos();
                vertices.push(SphereVertex {
                    position: [-cos_u * sin_v, cos_v, sin_u * sin_v],
                });
            }
        }

        let row = segments + 1;
        let mut indices = Vec::with_capacity((segments * (rings - 1) * 6) as usize);
        for iy in 0..rings {
            for ix in 0..segments {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                // The pole rows each collapse one triangle of the quad.
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != rings - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }
}
