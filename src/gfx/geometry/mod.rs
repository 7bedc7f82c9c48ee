//! # Procedural Geometry Generation
//!
//! Meshes the solar system needs, generated once and shared by every body:
//!
//! - **Sphere**: unit UV sphere for the sun and planets
//! - **Ring**: flat annulus for ringed planets
//! - **Orbit circle**: closed line loop in the XZ plane
//!
//! ## Usage
//!
//! ```rust
//! use orrery::gfx::geometry::{generate_orbit_circle, generate_ring, generate_sphere};
//!
//! let sphere = generate_sphere(48, 48);
//! let ring = generate_ring(1.4, 2.2, 5.0);
//! let orbit = generate_orbit_circle(7.5, 180);
//! assert_eq!(orbit.vertex_count(), 180);
//! # let _ = (sphere, ring);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::simulation::body::{RING_INNER_SCALE, RING_OUTER_SCALE};

/// The three meshes every frame is drawn from.
///
/// All are unit sized: the sphere has radius 1, the orbit circle radius 1, and
/// the ring radii are multiples of the body radius.
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    pub sphere: GeometryData,
    pub ring: GeometryData,
    pub orbit: GeometryData,
}

impl SceneMeshes {
    pub fn new() -> Self {
        Self {
            sphere: generate_sphere(BODY_SPHERE_SEGMENTS, BODY_SPHERE_SEGMENTS),
            ring: generate_ring(RING_INNER_SCALE, RING_OUTER_SCALE, RING_STEP_DEGREES),
            orbit: generate_orbit_circle(1.0, ORBIT_SEGMENTS),
        }
    }
}

impl Default for SceneMeshes {
    fn default() -> Self {
        Self::new()
    }
}

/// Generated geometry ready for upload by a renderer
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Indices, interpreted according to `topology`
    pub indices: Vec<u32>,
    pub topology: Topology,
}

/// How `indices` are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    #[default]
    TriangleList,
    /// Consecutive index pairs form segments.
    LineList,
}

impl GeometryData {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles, or zero for line geometry
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::TriangleList => self.indices.len() / 3,
            Topology::LineList => 0,
        }
    }
}
