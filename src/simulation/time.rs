use std::time::Instant;

/// Tracks the timestamp of the previous frame.
///
/// The first tick reports zero elapsed time so that the scene does not jump
/// by however long startup took.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_frame: None }
    }

    /// Seconds since the previous tick, never negative.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let elapsed = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame = Some(now);
        elapsed
    }
}
