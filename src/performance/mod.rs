//! # Frame Timing
//!
//! The wall-clock side of the frame loop. [`FrameClock`] measures the
//! delta time handed to the camera each frame and keeps a short window of
//! frame times for the HUD's FPS readout. The camera itself never reads
//! the clock - it only ever sees the delta as a parameter.

use std::collections::VecDeque;
use std::time::Instant;

// Enough history to smooth the readout without hiding hitches.
const FRAME_WINDOW: usize = 120;

/// Per-frame delta time source with a windowed FPS average.
pub struct FrameClock {
    last_frame: Instant,
    frame_times: VecDeque<f32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame_times: VecDeque::with_capacity(FRAME_WINDOW),
        }
    }

    /// Marks a new frame and returns the elapsed seconds since the last
    /// one. The first call returns the time since construction.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(delta);
        delta
    }

    /// Average frames per second over the recent window.
    pub fn fps(&self) -> f32 {
        let average = self.average_frame_time();
        if average > 0.0 {
            1.0 / average
        } else {
            0.0
        }
    }

    /// Average frame time in milliseconds over the recent window.
    pub fn average_frame_time_ms(&self) -> f32 {
        self.average_frame_time() * 1000.0
    }

    fn record(&mut self, delta: f32) {
        if self.frame_times.len() == FRAME_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta);
    }

    fn average_frame_time(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_is_zero_before_first_tick() {
        let clock = FrameClock::new();
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.average_frame_time_ms(), 0.0);
    }

    #[test]
    fn test_fps_averages_recorded_frames() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            clock.record(1.0 / 60.0);
        }
        assert!((clock.fps() - 60.0).abs() < 0.1);
        assert!((clock.average_frame_time_ms() - 16.666).abs() < 0.1);
    }

    #[test]
    fn test_window_discards_old_frames() {
        let mut clock = FrameClock::new();
        // A long stall followed by a full window of fast frames: the stall
        // must age out of the average.
        clock.record(1.0);
        for _ in 0..FRAME_WINDOW {
            clock.record(0.01);
        }
        assert_eq!(clock.frame_times.len(), FRAME_WINDOW);
        assert!((clock.fps() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_tick_returns_positive_delta() {
        let mut clock = FrameClock::new();
        let delta = clock.tick();
        assert!(delta >= 0.0);
        assert_eq!(clock.frame_times.len(), 1);
    }
}
