//! Time management utilities

use std::time::Instant;

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Advance by a fixed step instead of wall-clock time (headless hosts, tests)
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_advance() {
        let mut timer = Timer::new();
        timer.advance(0.5);
        timer.advance(0.25);
        assert_eq!(timer.frame_count(), 2);
        assert!((timer.total_time() - 0.75).abs() < f32::EPSILON);
        assert!((timer.current_fps() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_wall_clock_update() {
        let mut timer = Timer::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        timer.update();
        assert_eq!(timer.frame_count(), 1);
        assert!(timer.delta_time() >= 0.009);
        assert!((timer.total_time() - timer.delta_time()).abs() < f32::EPSILON);
    }
}
