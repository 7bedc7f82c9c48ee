//! Asteroid belt rotating as one rigid disk.

use cgmath::{Deg, Matrix3, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{finite_or, wrap_degrees};

/// Sampling parameters for the belt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidBeltConfig {
    pub enabled: bool,
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Half thickness of the belt along Y.
    pub height: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
}

impl Default for AsteroidBeltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 300,
            inner_radius: 10.0,
            outer_radius: 12.0,
            height: 0.5,
            rotation_speed: 5.0,
        }
    }
}

/// One sampled asteroid, in belt-local polar form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidOffset {
    pub radius: f32,
    /// Degrees in `[0, 360)`.
    pub angle: f32,
    pub height: f32,
}

impl AsteroidOffset {
    /// Position in the belt's own (unrotated) frame.
    pub fn local_position(&self) -> Vector3<f32> {
        let theta = self.angle.to_radians();
        Vector3::new(self.radius * theta.cos(), self.height, self.radius * theta.sin())
    }
}

#[derive(Debug, Clone)]
pub struct AsteroidBelt {
    offsets: Vec<AsteroidOffset>,
    rotation_speed: f32,
    angle: f32,
}

impl AsteroidBelt {
    /// Samples the belt once. Offsets never change afterwards.
    ///
    /// Non-finite values in `config` are replaced by the defaults.
    pub fn generate<R: Rng + ?Sized>(config: &AsteroidBeltConfig, rng: &mut R) -> Self {
        let defaults = AsteroidBeltConfig::default();
        let inner_radius =
            finite_or(config.inner_radius, defaults.inner_radius, "belt inner radius");
        let outer_radius =
            finite_or(config.outer_radius, defaults.outer_radius, "belt outer radius");
        let inner = inner_radius.min(outer_radius).max(0.0);
        let outer = inner_radius.max(outer_radius).max(0.0);
        let height = finite_or(config.height, defaults.height, "belt height").abs();
        let rotation_speed =
            finite_or(config.rotation_speed, defaults.rotation_speed, "belt speed");

        let offsets = (0..config.count)
            .map(|_| AsteroidOffset {
                radius: rng.random_range(inner..=outer),
                angle: rng.random_range(0.0..360.0),
                height: rng.random_range(-height..=height),
            })
            .collect();

        log::debug!(
            "Generated asteroid belt with {} asteroids in [{}, {}]",
            config.count,
            inner,
            outer
        );

        Self {
            offsets,
            rotation_speed,
            angle: 0.0,
        }
    }

    pub fn advance(&mut self, effective_dt: f32) {
        self.angle = wrap_degrees(self.angle + self.rotation_speed * effective_dt);
    }

    pub fn reset_phase(&mut self) {
        self.angle = 0.0;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn offsets(&self) -> &[AsteroidOffset] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// World positions of every asteroid, rotated rigidly by the belt angle about +Y.
    pub fn world_positions(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        let rotation = Matrix3::from_angle_y(Deg(self.angle));
        self.offsets
            .iter()
            .map(move |offset| rotation * offset.local_position())
    }
}
