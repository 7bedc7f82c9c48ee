// src/simulation/mod.rs
//! Simulation system
//!
//! Animated scene state: bodies, the asteroid belt, background stars and the
//! frame clock that feeds them.

pub mod asteroid_belt;
pub mod body;
pub mod solar_system;
pub mod starfield;
pub mod time;
pub mod traits;

pub use asteroid_belt::{AsteroidBelt, AsteroidBeltConfig};
pub use body::{BodyParams, CelestialBody};
pub use solar_system::{SceneError, SolarSystem, SunParams};
pub use starfield::{generate_starfield, Star, StarfieldConfig};
pub use time::FrameClock;
pub use traits::Simulation;
