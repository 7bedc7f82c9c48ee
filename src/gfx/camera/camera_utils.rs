use cgmath::{Matrix4, Point3, SquareMatrix, Vector3};

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};
use crate::input::Command;

pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Applies a camera command. Returns false for commands the camera ignores.
    pub fn process_command(&mut self, command: Command) -> bool {
        self.controller.apply(command, &mut self.camera)
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

/// Look-at parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl ViewTransform {
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Projection times view, column major, with depth already remapped to
    /// `[0, 1]` by [`OPENGL_TO_WGPU_MATRIX`](super::orbit_camera::OPENGL_TO_WGPU_MATRIX).
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}
