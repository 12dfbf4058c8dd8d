//! Drifting camera.
//!
//! Each frame the camera eases a fixed fraction of the way towards a target
//! that slowly circles in front of the model, then re-aims at the model.
//! The easing is per frame, not per second, so the glide speed follows the
//! frame rate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRigConfig {
    /// Seconds of elapsed time per radian of drift.
    pub period: f32,
    /// Base distance of the target along +Z.
    pub distance: f32,
    /// Amplitude of the Z sway added to `distance`.
    pub sway: f32,
    /// Fraction of the remaining gap closed each frame, in `(0, 1]`.
    pub lerp_factor: f32,
    pub look_at: Vec3,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            period: 5.0,
            distance: 12.0,
            sway: 0.5,
            lerp_factor: 0.05,
            look_at: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    config: CameraRigConfig,
}

impl CameraRig {
    #[must_use]
    pub fn new(config: CameraRigConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CameraRigConfig {
        &self.config
    }

    /// Target position at `elapsed` seconds:
    /// `(sin(t/p), 0, d + sway * cos(t/p))`.
    #[must_use]
    pub fn target(&self, elapsed: f32) -> Vec3 {
        let phase = elapsed / self.config.period;
        Vec3::new(phase.sin(), 0.0, self.config.distance + self.config.sway * phase.cos())
    }

    /// One easing step from `current` towards the target.
    #[must_use]
    pub fn step(&self, current: Vec3, elapsed: f32) -> Vec3 {
        current.lerp(self.target(elapsed), self.config.lerp_factor)
    }

    /// Moves `transform` one step and points it at the look-at point.
    pub fn apply(&self, transform: &mut Transform, elapsed: f32) {
        transform.position = self.step(transform.position, elapsed);
        transform.look_at(self.config.look_at, Vec3::Y);
    }
}
