//! Viewer configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes:
//!
//! ```json
//! { "drag": { "sensitivity": 0.0001 }, "camera": { "fov": 35.0 } }
//! ```

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::scene::{Camera, Orientation};
use crate::viewer::camera_rig::CameraRigConfig;
use crate::viewer::drag_rotate::DragRotateConfig;
use crate::viewer::performance::PerformanceConfig;
use crate::viewer::studio::StudioConfig;

/// Where the loaded model sits in the studio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPlacement {
    pub position: Vec3,
    pub scale: f32,
    /// Starting pitch, radians.
    pub pitch: f32,
    /// Starting yaw, radians.
    pub yaw: f32,
}

impl Default for ModelPlacement {
    fn default() -> Self {
        Self {
            position: Vec3::new(-0.5, -0.18, 0.0),
            scale: 1.6,
            pitch: 0.0,
            yaw: PI / 5.0,
        }
    }
}

impl ModelPlacement {
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.pitch, self.yaw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Vertical field of view, degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 0.0, 15.0),
            fov: 30.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    #[must_use]
    pub fn build(&self, aspect: f32) -> Camera {
        Camera::new_perspective(self.fov, aspect, self.near, self.far).with_position(self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub model: ModelPlacement,
    pub camera: CameraConfig,
    pub camera_rig: CameraRigConfig,
    pub drag: DragRotateConfig,
    /// One panel button per label, in clip order.
    pub clip_labels: Vec<String>,
    pub studio: StudioConfig,
    pub performance: PerformanceConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Turntable".into(),
            model: ModelPlacement::default(),
            camera: CameraConfig::default(),
            camera_rig: CameraRigConfig::default(),
            drag: DragRotateConfig::default(),
            clip_labels: (1..=6).map(|i| format!("Animation {i}")).collect(),
            studio: StudioConfig::default(),
            performance: PerformanceConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }
}
