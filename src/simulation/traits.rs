//! Core simulation traits for the orrery
//!
//! Defines the lifecycle the application drives once per frame.

/// A time-driven simulation advanced by the application loop.
pub trait Simulation {
    /// Advance simulation state
    ///
    /// Called every frame with the real time elapsed since the previous frame.
    /// Implementations apply their own pause and time-scale policy.
    ///
    /// # Arguments
    /// * `delta_time` - Real seconds since the last update, non-negative
    fn update(&mut self, delta_time: f32);

    /// Simulation name for window titles and logs
    fn name(&self) -> &str;

    /// Whether simulated time is currently flowing
    fn is_running(&self) -> bool;

    /// Start/pause simulation
    fn set_running(&mut self, running: bool);

    /// Return every animated quantity to its initial phase
    fn reset(&mut self);
}
