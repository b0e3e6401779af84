//! Frame clock and simulation step
//!
//! Converts wall-clock time into the millisecond timestamps the app
//! controller runs on and drives one controller frame per redraw.

use std::time::Instant;

use crate::app::{AppController, FrameStats};
use crate::audio::AudioSink;

/// Drives the app controller from the wall clock
pub struct SimulationSystem {
    started: Instant,
    last_frame_ms: f64,
    frames: u64,
}

impl SimulationSystem {
    /// Create a new simulation system; time zero is now
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            last_frame_ms: 0.0,
            frames: 0,
        }
    }

    /// Milliseconds since startup
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Run one frame of the controller at the current time
    pub fn update<S: AudioSink>(&mut self, app: &mut AppController<S>) -> FrameStats {
        let now_ms = self.now_ms();
        self.step(app, now_ms)
    }

    /// Run one frame at an explicit time
    ///
    /// Time never runs backwards; an earlier `now_ms` is treated as the
    /// previous frame's time.
    pub fn step<S: AudioSink>(&mut self, app: &mut AppController<S>, now_ms: f64) -> FrameStats {
        let now_ms = now_ms.max(self.last_frame_ms);
        self.last_frame_ms = now_ms;
        self.frames += 1;

        let stats = app.frame(now_ms);
        if stats.effects_fired > 0 {
            log::trace!("Frame {}: {} effects fired", self.frames, stats.effects_fired);
        }
        stats
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogAudioSink;
    use crate::config::AppConfig;

    fn app() -> AppController<LogAudioSink> {
        let mut config = AppConfig::default();
        config.animation.seed = Some(3);
        AppController::new(&config, LogAudioSink::new())
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(sim.now_ms() < 100.0);
        assert_eq!(sim.frame_count(), 0);
    }

    #[test]
    fn test_step_counts_frames() {
        let mut sim = SimulationSystem::new();
        let mut app = app();
        sim.step(&mut app, 16.0);
        sim.step(&mut app, 32.0);
        assert_eq!(sim.frame_count(), 2);
    }

    #[test]
    fn test_time_never_runs_backwards() {
        let mut sim = SimulationSystem::new();
        let mut app = app();
        // Menu expands at 500 ms
        sim.step(&mut app, 600.0);
        assert!(app.state().menu.is_expanded());
        let stats = sim.step(&mut app, 100.0);
        assert_eq!(stats.deferred_applied, 0);
        assert_eq!(sim.last_frame_ms, 600.0);
    }
}
