use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform, ViewTransform};
use crate::simulation::body::{finite_or, wrap_degrees};
use cgmath::*;

/// Remaps OpenGL clip depth `[-1, 1]` to `[0, 1]`, the range wgpu, Vulkan,
/// Metal and D3D expect.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Camera orbiting a target point.
///
/// The eye position is never stored; it is derived from distance, yaw, pitch
/// and target every time it is needed. Angles are in degrees.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub target: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub projection: Projection,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = self.view_transform().view_matrix();
        let proj = OPENGL_TO_WGPU_MATRIX
            * perspective(
                self.projection.fovy,
                self.projection.aspect,
                self.projection.znear,
                self.projection.zfar,
            );
        proj * view
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let bounds = OrbitCameraBounds::default();
        let distance = finite_or(distance, bounds.min_distance, "camera distance");
        let pitch = finite_or(pitch, 0.0, "camera pitch");
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            log::warn!("Invalid camera aspect {}, using 1.0", aspect);
            1.0
        };

        Self {
            distance: distance.clamp(bounds.min_distance, bounds.max_distance),
            pitch: pitch.clamp(bounds.min_pitch, bounds.max_pitch),
            yaw: wrap_degrees(yaw),
            target,
            bounds,
            projection: Projection {
                aspect,
                ..Default::default()
            },
        }
    }

    /// Moves the eye toward (negative) or away from (positive) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.set_distance(self.distance + delta);
    }

    /// Yaw wraps around the circle, pitch stops at the bounds.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.add_yaw(yaw_delta);
        self.add_pitch(pitch_delta);
    }

    pub fn set_distance(&mut self, distance: f32) {
        if distance.is_nan() {
            return;
        }
        self.distance = distance.clamp(self.bounds.min_distance, self.bounds.max_distance);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        if pitch.is_nan() {
            return;
        }
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_degrees(yaw);
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    pub fn eye(&self) -> Point3<f32> {
        Point3::from_vec(calculate_cartesian_eye_position(
            Deg(self.pitch).into(),
            Deg(self.yaw).into(),
            self.distance,
            self.target,
        ))
    }

    /// Eye, target and world-up for a look-at view.
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            eye: self.eye(),
            target: Point3::from_vec(self.target),
            up: Vector3::unit_y(),
        }
    }

    /// Zero-sized surfaces (a minimised window) keep the previous aspect.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.projection.aspect = width as f32 / height as f32;
    }

    pub fn uniform(&self) -> CameraUniform {
        let eye = self.eye();
        CameraUniform {
            view_position: [eye.x, eye.y, eye.z, 1.0],
            view_proj: convert_matrix4_to_array(self.build_view_projection_matrix()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for OrbitCameraBounds {
    /// Pitch stays well short of the poles so the world-up vector never
    /// lines up with the view direction.
    fn default() -> Self {
        Self {
            min_distance: 6.0,
            max_distance: 120.0,
            min_pitch: -80.0,
            max_pitch: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 1.0,
            fovy: Deg(60.0),
            znear: 0.5,
            zfar: 300.0,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: Rad<f32>,
    yaw: Rad<f32>,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.0.sin() * pitch.0.cos(),
        distance * pitch.0.sin(),
        distance * yaw.0.cos() * pitch.0.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(45.0, 18.0, 0.0, Vector3::zero(), 1.0)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_zoom_clamps() {
        let mut camera = camera();
        for _ in 0..100 {
            camera.zoom(-1.5);
            assert!(camera.distance >= 6.0);
        }
        assert_eq!(camera.distance, 6.0);
        for _ in 0..200 {
            camera.zoom(1.5);
            assert!(camera.distance <= 120.0);
        }
        assert_eq!(camera.distance, 120.0);
    }

    #[test]
    fn test_pitch_clamps_and_yaw_wraps() {
        let mut camera = camera();
        camera.rotate(0.0, 1000.0);
        assert_eq!(camera.pitch, 80.0);
        camera.rotate(0.0, -1000.0);
        assert_eq!(camera.pitch, -80.0);

        camera.rotate(1000.0, 0.0);
        assert!(approx(camera.yaw, 280.0));
        camera.rotate(-300.0, 0.0);
        assert!(approx(camera.yaw, 340.0));
    }

    #[test]
    fn test_eye_position() {
        let mut camera = OrbitCamera::new(10.0, 0.0, 0.0, Vector3::zero(), 1.0);
        let eye = camera.eye();
        assert!(approx(eye.x, 0.0) && approx(eye.y, 0.0) && approx(eye.z, 10.0));

        camera.set_yaw(90.0);
        let eye = camera.eye();
        assert!(approx(eye.x, 10.0) && approx(eye.z, 0.0));

        camera.set_yaw(0.0);
        camera.set_pitch(30.0);
        let eye = camera.eye();
        assert!(approx(eye.y, 5.0));
        assert!(approx(eye.z, 10.0 * 30f32.to_radians().cos()));
    }

    #[test]
    fn test_view_transform_offsets_by_target() {
        let target = Vector3::new(1.0, 2.0, 3.0);
        let camera = OrbitCamera::new(10.0, 0.0, 0.0, target, 1.0);
        let view = camera.view_transform();
        assert!(approx(view.eye.z, 13.0) && approx(view.eye.x, 1.0) && approx(view.eye.y, 2.0));
        assert_eq!(view.target, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(view.up, Vector3::unit_y());
    }

    #[test]
    fn test_constructor_clamps() {
        let camera = OrbitCamera::new(500.0, 120.0, -30.0, Vector3::zero(), 1.0);
        assert_eq!(camera.distance, 120.0);
        assert_eq!(camera.pitch, 80.0);
        assert!(approx(camera.yaw, 330.0));
    }

    #[test]
    fn test_resize_ignores_zero_sizes() {
        let mut camera = camera();
        camera.resize_projection(1000, 500);
        assert_eq!(camera.projection.aspect, 2.0);
        camera.resize_projection(1000, 0);
        camera.resize_projection(0, 500);
        camera.resize_projection(0, 0);
        assert_eq!(camera.projection.aspect, 2.0);

        // Still a valid projection after a minimise.
        let m = camera.build_view_projection_matrix();
        assert!(m.x.x.is_finite() && m.y.y.is_finite());
    }

    #[test]
    fn test_non_finite_construction_falls_back() {
        let camera = OrbitCamera::new(f32::NAN, f32::NAN, f32::NAN, Vector3::zero(), 0.0);
        assert_eq!(camera.distance, 6.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.projection.aspect, 1.0);

        let camera = OrbitCamera::new(f32::INFINITY, 18.0, 0.0, Vector3::zero(), f32::NAN);
        assert_eq!(camera.distance, 6.0);
        assert_eq!(camera.projection.aspect, 1.0);
        assert!(camera.eye().x.is_finite());
    }

    #[test]
    fn test_uniform_carries_eye() {
        let camera = camera();
        let uniform = camera.uniform();
        let eye = camera.eye();
        assert_eq!(uniform.view_position, [eye.x, eye.y, eye.z, 1.0]);
    }
}
