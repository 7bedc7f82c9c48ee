// src/lib.rs
//! Orrery
//!
//! An animated solar system: planets revolving and spinning on tilted axes, an
//! orbit camera, a starfield backdrop and a rotating asteroid belt. The crate
//! owns the animation and camera state and produces a per-frame draw list for
//! any [`gfx::Renderer`].

pub mod app;
pub mod config;
pub mod gfx;
pub mod input;
pub mod simulation;

// Re-export main types for convenience
pub use app::OrreryApp;
pub use config::{ConfigError, OrreryConfig};
pub use input::Command;
pub use simulation::{SolarSystem, Simulation};
