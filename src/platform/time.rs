//! Frame timing
//!
//! Converts host timestamps into delta-times and keeps a rolling FPS figure.

use crate::consts::{MAX_FRAME_DT, TARGET_FPS};

const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Target frame interval in seconds
    pub fn frame_interval() -> f32 {
        1.0 / TARGET_FPS as f32
    }

    /// Register a frame at `now` (seconds) and return the delta-time to
    /// simulate. The first frame gets one target interval.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now - last) as f32).clamp(0.0, MAX_FRAME_DT),
            None => Self::frame_interval(),
        };
        self.last_time = Some(now);

        // Oldest sample sits where the newest one is about to go
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen += 1;

        if self.frames_seen > FPS_WINDOW {
            let elapsed = now - oldest;
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
            }
        }

        dt
    }

    /// Frames per second over the last 60 frames (0 until warmed up)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_uses_target_interval() {
        let mut clock = FrameClock::new();
        let dt = clock.tick(12.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_delta_between_frames() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        let dt = clock.tick(1.02);
        assert!((dt - 0.02).abs() < 1e-4);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        assert_eq!(clock.tick(9.0), MAX_FRAME_DT);
        // Clock going backwards
        assert_eq!(clock.tick(8.0), 0.0);
    }

    #[test]
    fn test_fps_after_warmup() {
        let mut clock = FrameClock::new();
        for i in 0..=FPS_WINDOW * 2 {
            clock.tick(i as f64 / 50.0);
        }
        assert_eq!(clock.fps(), 50);
    }
}
