/// Rolling frame-rate estimate over fixed windows of frame time.
///
/// Frame deltas are fed in by the caller, so the counter follows whatever
/// clock drives the frame loop.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: f32,
    frame_count: u32,
    accumulated_time: f32,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    /// One-second sampling window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(1.0)
    }

    #[must_use]
    pub fn with_window(window_seconds: f32) -> Self {
        Self {
            window: window_seconds.max(f32::EPSILON),
            frame_count: 0,
            accumulated_time: 0.0,
            current_fps: 0.0,
        }
    }

    /// Records one frame of `dt` seconds. Returns the average FPS whenever
    /// a window completes.
    pub fn record(&mut self, dt: f32) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_time += dt.max(0.0);

        if self.accumulated_time < self.window {
            return None;
        }

        self.current_fps = self.frame_count as f32 / self.accumulated_time;
        self.accumulated_time = 0.0;
        self.frame_count = 0;
        Some(self.current_fps)
    }
}
