//! Startup configuration with defaults and RON persistence.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::gfx::camera::CameraController;
use crate::simulation::{AsteroidBeltConfig, BodyParams, StarfieldConfig, SunParams};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read scene file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the parent directory or writing the file failed.
    #[error("cannot write scene file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid RON for [`OrreryConfig`]. The source carries the line and column.
    #[error("invalid scene file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot encode scene config: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrreryConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub asteroid_belt: AsteroidBeltConfig,
    pub starfield: StarfieldConfig,
    /// Seed for star and asteroid sampling. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            title: "Solar System".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    pub controls: CameraController,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 45.0,
            yaw: 0.0,
            pitch: 18.0,
            controls: CameraController::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub name: String,
    pub time_scale: f32,
    /// Step applied by the speed up/down commands.
    pub time_scale_step: f32,
    pub show_orbits: bool,
    pub use_textures: bool,
    /// Directory texture paths are relative to.
    pub texture_root: String,
    pub sun: SunParams,
    /// Draw order.
    pub bodies: Vec<BodyParams>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "Solar System".to_string(),
            time_scale: 0.2,
            time_scale_step: 0.1,
            show_orbits: true,
            use_textures: true,
            texture_root: ".".to_string(),
            sun: SunParams::default(),
            bodies: default_planets(),
        }
    }
}

/// The eight planets. Speeds are degrees per second, tilts are the real obliquities.
pub fn default_planets() -> Vec<BodyParams> {
    vec![
        BodyParams::new("Mercury", 4.0, 0.35, [0.7, 0.7, 0.7])
            .with_speeds(300.0, 600.0)
            .with_tilt(0.03)
            .with_texture("textures/mercury.jpg"),
        BodyParams::new("Venus", 5.5, 0.55, [0.9, 0.8, 0.5])
            .with_speeds(240.0, 480.0)
            .with_tilt(177.4)
            .with_texture("textures/venus.jpg"),
        BodyParams::new("Earth", 7.5, 0.60, [0.2, 0.4, 1.0])
            .with_speeds(180.0, 720.0)
            .with_tilt(23.4)
            .with_texture("textures/earth.jpg"),
        BodyParams::new("Mars", 9.5, 0.45, [0.9, 0.3, 0.2])
            .with_speeds(150.0, 600.0)
            .with_tilt(25.2)
            .with_texture("textures/mars.jpg"),
        BodyParams::new("Jupiter", 12.5, 1.25, [0.9, 0.7, 0.5])
            .with_speeds(90.0, 900.0)
            .with_tilt(3.1)
            .with_texture("textures/jupiter.jpg"),
        BodyParams::new("Saturn", 16.0, 1.10, [0.9, 0.85, 0.6])
            .with_speeds(72.0, 840.0)
            .with_tilt(26.7)
            .with_texture("textures/saturn.jpg")
            .with_rings(),
        BodyParams::new("Uranus", 19.5, 0.90, [0.6, 0.8, 0.9])
            .with_speeds(48.0, 720.0)
            .with_tilt(97.8)
            .with_texture("textures/uranus.jpg"),
        BodyParams::new("Neptune", 23.0, 0.85, [0.3, 0.4, 0.9])
            .with_speeds(36.0, 660.0)
            .with_tilt(28.3)
            .with_texture("textures/neptune.jpg"),
    ]
}

impl OrreryConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, or writes the defaults there if it does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.save(path)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source: io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, serialized).map_err(write_error)?;
        Ok(())
    }
}
