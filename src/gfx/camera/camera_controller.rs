use serde::{Deserialize, Serialize};

use super::orbit_camera::OrbitCamera;
use crate::input::Command;

/// Step sizes applied per camera command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraController {
    /// Degrees of yaw per left/right command.
    pub yaw_step: f32,
    /// Degrees of pitch per up/down command.
    pub pitch_step: f32,
    /// Distance change per zoom command.
    pub zoom_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(3.0, 2.0, 1.5)
    }
}

impl CameraController {
    pub fn new(yaw_step: f32, pitch_step: f32, zoom_step: f32) -> Self {
        Self {
            yaw_step,
            pitch_step,
            zoom_step,
        }
    }

    /// Applies `command` to `camera` if it is a camera command.
    pub fn apply(&self, command: Command, camera: &mut OrbitCamera) -> bool {
        match command {
            Command::ZoomIn => camera.zoom(-self.zoom_step),
            Command::ZoomOut => camera.zoom(self.zoom_step),
            Command::YawLeft => camera.rotate(-self.yaw_step, 0.0),
            Command::YawRight => camera.rotate(self.yaw_step, 0.0),
            Command::PitchUp => camera.rotate(0.0, self.pitch_step),
            Command::PitchDown => camera.rotate(0.0, -self.pitch_step),
            _ => return false,
        }

        log::debug!(
            "Camera: distance {:.1}, yaw {:.1}, pitch {:.1}",
            camera.distance,
            camera.yaw,
            camera.pitch
        );
        true
    }
}
