//! Per-frame draw list.
//!
//! A [`Frame`] is everything a renderer needs to draw one image: the view,
//! one model matrix per body, ring and orbit descriptions, the shared meshes
//! and the point clouds. It is rebuilt from scene state every frame and never
//! fed back.

use cgmath::Matrix4;

use super::camera::{CameraUniform, OrbitCamera, ViewTransform};
use super::geometry::SceneMeshes;
use super::texture::TextureHandle;
use crate::simulation::{CelestialBody, SolarSystem, Star};

pub const ORBIT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const RING_COLOR: [f32; 3] = [0.8, 0.75, 0.6];
pub const ASTEROID_COLOR: [f32; 3] = [0.6, 0.6, 0.6];

/// A coloured point, laid out for direct vertex buffer upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl From<&Star> for PointVertex {
    fn from(star: &Star) -> Self {
        Self {
            position: star.position,
            color: [star.brightness; 3],
        }
    }
}

/// Draw `meshes.sphere` with `model`.
#[derive(Debug, Clone)]
pub struct BodyDraw<'a> {
    pub name: &'a str,
    pub model: Matrix4<f32>,
    pub color: [f32; 3],
    /// `None` when the body has no texture or texturing is switched off.
    pub texture: Option<TextureHandle>,
}

/// Draw `meshes.ring` with `model`, which already includes the body radius.
#[derive(Debug, Clone)]
pub struct RingDraw {
    pub model: Matrix4<f32>,
    /// World-space radii, for renderers that build their own annulus.
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: [f32; 3],
}

/// Draw a circle of `radius` around the origin in the XZ plane.
#[derive(Debug, Clone, Copy)]
pub struct OrbitDraw {
    pub radius: f32,
    pub color: [f32; 3],
}

impl OrbitDraw {
    /// Model matrix for `meshes.orbit`.
    pub fn model(&self) -> Matrix4<f32> {
        Matrix4::from_scale(self.radius)
    }
}

#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub view: ViewTransform,
    pub camera: CameraUniform,
    pub sun: BodyDraw<'a>,
    /// In scene order.
    pub bodies: Vec<BodyDraw<'a>>,
    pub rings: Vec<RingDraw>,
    pub orbits: Vec<OrbitDraw>,
    pub asteroids: Vec<PointVertex>,
    pub stars: &'a [PointVertex],
    pub meshes: &'a SceneMeshes,
}

impl<'a> Frame<'a> {
    pub fn build(
        scene: &'a SolarSystem,
        camera: &OrbitCamera,
        meshes: &'a SceneMeshes,
        stars: &'a [PointVertex],
    ) -> Self {
        let sun = scene.sun();
        let sun = BodyDraw {
            name: "Sun",
            model: Matrix4::from_scale(sun.params.radius),
            color: sun.params.color,
            texture: scene.sun_texture(),
        };

        let bodies = scene
            .bodies()
            .iter()
            .map(|body| body_draw(scene, body))
            .collect();

        let rings = scene
            .bodies()
            .iter()
            .filter(|body| body.has_rings())
            .map(|body| {
                let (inner_radius, outer_radius) = body.ring_radii();
                RingDraw {
                    model: body.ring_matrix() * Matrix4::from_scale(body.radius()),
                    inner_radius,
                    outer_radius,
                    color: RING_COLOR,
                }
            })
            .collect();

        let orbits = if scene.show_orbits() {
            scene
                .bodies()
                .iter()
                .map(|body| OrbitDraw {
                    radius: body.orbit_radius(),
                    color: ORBIT_COLOR,
                })
                .collect()
        } else {
            Vec::new()
        };

        let asteroids = scene
            .asteroid_belt()
            .map(|belt| {
                belt.world_positions()
                    .map(|p| PointVertex {
                        position: p.into(),
                        color: ASTEROID_COLOR,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            view: camera.view_transform(),
            camera: camera.uniform(),
            sun,
            bodies,
            rings,
            orbits,
            asteroids,
            stars,
            meshes,
        }
    }
}

fn body_draw<'a>(scene: &SolarSystem, body: &'a CelestialBody) -> BodyDraw<'a> {
    BodyDraw {
        name: body.name(),
        model: body.model_matrix(),
        color: body.color(),
        texture: scene.texture_for(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{
        generate_starfield, AsteroidBelt, AsteroidBeltConfig, BodyParams, SunParams,
    };
    use cgmath::{Vector3, Vector4, Zero};
    use rand::{rngs::StdRng, SeedableRng};

    fn scene() -> SolarSystem {
        let mut scene = SolarSystem::from_params(
            "Test",
            SunParams::default(),
            vec![
                BodyParams::new("Earth", 7.5, 0.6, [0.2, 0.4, 1.0]).with_speeds(30.0, 360.0),
                BodyParams::new("Saturn", 16.0, 1.1, [0.9, 0.85, 0.6])
                    .with_speeds(10.0, 300.0)
                    .with_rings(),
            ],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        scene.set_asteroid_belt(Some(AsteroidBelt::generate(
            &AsteroidBeltConfig {
                count: 25,
                ..Default::default()
            },
            &mut rng,
        )));
        scene
    }

    fn camera() -> OrbitCamera {
        OrbitCamera::new(45.0, 18.0, 0.0, Vector3::zero(), 1.0)
    }

    fn meshes() -> SceneMeshes {
        SceneMeshes::new()
    }

    #[test]
    fn test_frame_contents() {
        let scene = scene();
        let stars: Vec<PointVertex> = generate_starfield(10, 50.0, &mut StdRng::seed_from_u64(1))
            .iter()
            .map(PointVertex::from)
            .collect();
        let meshes = meshes();
        let frame = Frame::build(&scene, &camera(), &meshes, &stars);

        assert_eq!(frame.bodies.len(), 2);
        assert_eq!(frame.bodies[1].name, "Saturn");
        assert_eq!(frame.rings.len(), 1);
        assert!((frame.rings[0].inner_radius - 1.54).abs() < 1e-5);
        assert!((frame.rings[0].outer_radius - 2.42).abs() < 1e-5);
        assert_eq!(frame.orbits.len(), 2);
        assert_eq!(frame.asteroids.len(), 25);
        assert_eq!(frame.stars.len(), 10);
        assert!((frame.sun.model.x.x - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_orbits_hidden_when_toggled_off() {
        let mut scene = scene();
        scene.toggle_orbits();
        let meshes = meshes();
        let frame = Frame::build(&scene, &camera(), &meshes, &[]);
        assert!(frame.orbits.is_empty());
        assert_eq!(frame.bodies.len(), 2);
    }

    #[test]
    fn test_body_model_places_body_on_orbit() {
        let mut scene = scene();
        scene.advance(3.0);
        let meshes = meshes();
        let frame = Frame::build(&scene, &camera(), &meshes, &[]);
        let earth = &frame.bodies[0].model;
        let distance = (earth.w.x.powi(2) + earth.w.y.powi(2) + earth.w.z.powi(2)).sqrt();
        assert!((distance - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_ring_and_orbit_scale_shared_meshes() {
        let scene = scene();
        let meshes = meshes();
        let frame = Frame::build(&scene, &camera(), &meshes, &[]);

        // Outer ring vertex of the unit mesh lands at 2.2 body radii.
        let [x, y, z] = meshes.ring.vertices[1];
        let p = frame.rings[0].model * Vector4::new(x, y, z, 1.0);
        let saturn = scene.body("Saturn").unwrap().position();
        let d = ((p.x - saturn.x).powi(2) + (p.y - saturn.y).powi(2) + (p.z - saturn.z).powi(2))
            .sqrt();
        assert!((d - frame.rings[0].outer_radius).abs() < 1e-4);

        let orbit = frame.orbits[1].model() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((orbit.x - 16.0).abs() < 1e-5);
    }

    #[test]
    fn test_frame_after_zero_sized_resize() {
        let scene = scene();
        let meshes = meshes();
        let mut camera = camera();
        camera.resize_projection(0, 0);
        camera.resize_projection(800, 0);
        camera.resize_projection(0, 600);

        let frame = Frame::build(&scene, &camera, &meshes, &[]);
        assert!(frame
            .camera
            .view_proj
            .iter()
            .flatten()
            .all(|v| v.is_finite()));
        assert_eq!(frame.bodies.len(), 2);
    }

    #[test]
    fn test_star_vertex_uses_brightness() {
        let star = Star {
            position: [1.0, 2.0, 3.0],
            brightness: 0.75,
        };
        let vertex = PointVertex::from(&star);
        assert_eq!(vertex.color, [0.75; 3]);
        assert_eq!(bytemuck::bytes_of(&vertex).len(), 24);
    }
}
