//! # Graphics Module
//!
//! Everything between scene state and a concrete renderer.
//!
//! - **Camera System** ([`camera`]) - Orbit camera with clamped zoom and pitch
//! - **Geometry** ([`geometry`]) - Sphere, ring and orbit meshes
//! - **Frame** ([`frame`]) - Per-frame draw list built from scene state
//! - **Textures** ([`texture`]) - Handles and image decoding
//!
//! The drawing itself happens behind the [`Renderer`] trait.

pub mod camera;
pub mod frame;
pub mod geometry;
pub mod renderer;
pub mod texture;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use frame::{Frame, PointVertex};
pub use geometry::SceneMeshes;
pub use renderer::{LogRenderer, Renderer};
pub use texture::{ImageTextureLoader, TextureHandle, TextureLoader};
