//! Scene state: the sun, its planets, the asteroid belt and the global controls.

use serde::{Deserialize, Serialize};

use super::{
    asteroid_belt::AsteroidBelt,
    body::{finite_or, BodyParams, CelestialBody},
    traits::Simulation,
};
use crate::gfx::texture::{TextureHandle, TextureLoader};

pub const MIN_TIME_SCALE: f32 = 0.05;
pub const MAX_TIME_SCALE: f32 = 10.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("duplicate body name: {0}")]
    DuplicateBody(String),
}

/// The static central body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunParams {
    pub radius: f32,
    pub color: [f32; 3],
    pub texture_path: Option<String>,
}

impl Default for SunParams {
    fn default() -> Self {
        Self {
            radius: 2.2,
            color: [1.0, 0.85, 0.3],
            texture_path: Some("textures/sun.jpg".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sun {
    pub params: SunParams,
    pub texture: Option<TextureHandle>,
}

pub struct SolarSystem {
    name: String,
    sun: Sun,
    bodies: Vec<CelestialBody>,
    asteroid_belt: Option<AsteroidBelt>,
    time_scale: f32,
    paused: bool,
    show_orbits: bool,
    use_textures: bool,
}

impl SolarSystem {
    /// Creates a scene with no planets. Textures and orbits start enabled.
    pub fn new(name: &str, mut sun: SunParams) -> Self {
        let radius = finite_or(sun.radius, SunParams::default().radius, "sun radius");
        sun.radius = if radius > 0.0 { radius } else { SunParams::default().radius };
        for channel in sun.color.iter_mut() {
            *channel = finite_or(*channel, 1.0, "sun colour channel").clamp(0.0, 1.0);
        }

        Self {
            name: name.to_string(),
            sun: Sun {
                params: sun,
                texture: None,
            },
            bodies: Vec::new(),
            asteroid_belt: None,
            time_scale: 1.0,
            paused: false,
            show_orbits: true,
            use_textures: true,
        }
    }

    /// Builds a scene from body parameters, in draw order.
    pub fn from_params(
        name: &str,
        sun: SunParams,
        bodies: impl IntoIterator<Item = BodyParams>,
    ) -> Result<Self, SceneError> {
        let mut system = Self::new(name, sun);
        for params in bodies {
            system.add_body(params)?;
        }
        Ok(system)
    }

    /// Appends a body. Names must be unique within the scene.
    pub fn add_body(&mut self, params: BodyParams) -> Result<&mut CelestialBody, SceneError> {
        if self.body(&params.name).is_some() {
            return Err(SceneError::DuplicateBody(params.name));
        }
        self.bodies.push(CelestialBody::new(params));
        let index = self.bodies.len() - 1;
        Ok(&mut self.bodies[index])
    }

    pub fn set_asteroid_belt(&mut self, belt: Option<AsteroidBelt>) {
        self.asteroid_belt = belt;
    }

    /// Resolves every texture path through `loader`. Failures leave the body untextured.
    pub fn load_textures(&mut self, loader: &mut dyn TextureLoader) {
        if let Some(path) = self.sun.params.texture_path.as_deref() {
            self.sun.texture = loader.load(path);
        }

        for body in &mut self.bodies {
            let texture = body
                .params()
                .texture_path
                .as_deref()
                .and_then(|path| loader.load(path));
            body.set_texture(texture);
        }

        let loaded = self.bodies.iter().filter(|b| b.texture().is_some()).count();
        log::info!(
            "Textures resolved for {}/{} bodies (sun: {})",
            loaded,
            self.bodies.len(),
            self.sun.texture.is_some()
        );
    }

    /// Simulated seconds corresponding to `real_dt` real seconds.
    ///
    /// Zero while paused; negative or non-finite input counts as zero.
    pub fn effective_dt(&self, real_dt: f32) -> f32 {
        if self.paused || !real_dt.is_finite() || real_dt <= 0.0 {
            0.0
        } else {
            real_dt * self.time_scale
        }
    }

    /// Advances every body and the belt by the same effective time step.
    pub fn advance(&mut self, real_dt: f32) {
        let dt = self.effective_dt(real_dt);
        if dt == 0.0 {
            return;
        }

        for body in &mut self.bodies {
            body.advance(dt);
        }
        if let Some(belt) = self.asteroid_belt.as_mut() {
            belt.advance(dt);
        }
    }

    pub fn set_time_scale(&mut self, requested: f32) {
        if requested.is_nan() {
            log::warn!("Ignoring NaN time scale request");
            return;
        }
        self.time_scale = requested.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
        log::info!("Time scale set to {:.2}", self.time_scale);
    }

    pub fn adjust_time_scale(&mut self, delta: f32) {
        self.set_time_scale(self.time_scale + delta);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("Paused: {}", self.paused);
    }

    pub fn toggle_orbits(&mut self) {
        self.show_orbits = !self.show_orbits;
        log::info!("Show orbits: {}", self.show_orbits);
    }

    pub fn toggle_textures(&mut self) {
        self.use_textures = !self.use_textures;
        log::info!("Use textures: {}", self.use_textures);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn use_textures(&self) -> bool {
        self.use_textures
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn asteroid_belt(&self) -> Option<&AsteroidBelt> {
        self.asteroid_belt.as_ref()
    }

    /// Texture the renderer should bind for `body`, honouring the texture toggle.
    pub fn texture_for(&self, body: &CelestialBody) -> Option<TextureHandle> {
        if self.use_textures {
            body.texture()
        } else {
            None
        }
    }

    pub fn sun_texture(&self) -> Option<TextureHandle> {
        if self.use_textures {
            self.sun.texture
        } else {
            None
        }
    }

    /// Every distinct texture resolved for the sun and the bodies, regardless
    /// of the texture toggle.
    pub fn texture_handles(&self) -> Vec<TextureHandle> {
        let mut handles = Vec::new();
        let resolved = std::iter::once(self.sun.texture)
            .chain(self.bodies.iter().map(|body| body.texture()));
        for handle in resolved.flatten() {
            if !handles.contains(&handle) {
                handles.push(handle);
            }
        }
        handles
    }

    /// One-line summary of the controls.
    pub fn status_line(&self) -> String {
        format!(
            "{} | speed x{:.2}{} | orbits {} | textures {}",
            self.name,
            self.time_scale,
            if self.paused { " (paused)" } else { "" },
            if self.show_orbits { "on" } else { "off" },
            if self.use_textures { "on" } else { "off" },
        )
    }
}

impl Simulation for SolarSystem {
    fn update(&mut self, delta_time: f32) {
        self.advance(delta_time);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_running(&self) -> bool {
        !self.paused
    }

    fn set_running(&mut self, running: bool) {
        if self.paused == running {
            self.toggle_pause();
        }
    }

    fn reset(&mut self) {
        for body in &mut self.bodies {
            body.reset_phase();
        }
        if let Some(belt) = self.asteroid_belt.as_mut() {
            belt.reset_phase();
        }
    }
}
