//! Frame-rate watchdog.
//!
//! Once a sampling window averages below the decline threshold the viewer
//! stops re-rendering the environment every frame. The switch is one-way.

use serde::{Deserialize, Serialize};

use crate::utils::FpsCounter;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub decline_below_fps: f32,
    /// Sampling window, seconds.
    pub window: f32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            decline_below_fps: 50.0,
            window: 1.0,
        }
    }
}

/// How often the environment map is re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentFrames {
    EveryFrame,
    Once,
}

#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    config: PerformanceConfig,
    counter: FpsCounter,
    degraded: bool,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(PerformanceConfig::default())
    }
}

impl PerformanceMonitor {
    #[must_use]
    pub fn new(config: PerformanceConfig) -> Self {
        Self {
            counter: FpsCounter::with_window(config.window),
            config,
            degraded: false,
        }
    }

    /// Feeds one frame. Returns `true` on the frame that triggers the decline.
    pub fn record(&mut self, dt: f32) -> bool {
        let Some(fps) = self.counter.record(dt) else {
            return false;
        };
        if self.degraded || fps >= self.config.decline_below_fps {
            return false;
        }
        self.degraded = true;
        log::info!(
            "Frame rate {fps:.1} below {:.0} fps; environment now renders once",
            self.config.decline_below_fps
        );
        true
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub fn current_fps(&self) -> f32 {
        self.counter.current_fps
    }

    #[must_use]
    pub fn environment_frames(&self) -> EnvironmentFrames {
        if self.degraded {
            EnvironmentFrames::Once
        } else {
            EnvironmentFrames::EveryFrame
        }
    }
}
