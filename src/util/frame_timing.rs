use web_time::{Duration, Instant};

/// Per-frame clock: elapsed time, frame delta, smoothed FPS and optional
/// frame limiting.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    start: Instant,
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a new clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a clock whose time origin is `start`.
    #[must_use]
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            start,
            last_frame: start,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Advance to now. Returns `(time, delta)` in seconds.
    pub fn tick(&mut self) -> (f64, f64) {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. Returns `(time, delta)` in seconds; an instant
    /// earlier than the previous tick yields a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> (f64, f64) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = self.last_frame.max(now);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        let time = self.last_frame.duration_since(self.start).as_secs_f64();
        (time, elapsed.as_secs_f64())
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
