//! Studio lighting as data
//!
//! Lights, contact shadows, the environment and the lightformer cards that
//! shape the car's reflections. Nothing here draws: [`Studio`] animates the
//! few moving parts and hands out resolved placements for a
//! [`RenderSurface`](crate::app::surface::RenderSurface) to consume.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Affine3A, EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::scene::Transform;

const WHITE: Vec3 = Vec3::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLightConfig {
    pub position: Vec3,
    /// Cone half-angle, radians.
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
    pub cast_shadow: bool,
    pub shadow_bias: f32,
}

impl Default for SpotLightConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 15.0, 0.0),
            angle: 0.3,
            penumbra: 1.0,
            intensity: 2.0,
            cast_shadow: true,
            shadow_bias: -0.0001,
        }
    }
}

/// Jittered light used to accumulate soft contact shadows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizedLightConfig {
    pub amount: u32,
    pub radius: f32,
    pub ambient: f32,
    pub position: Vec3,
}

impl Default for RandomizedLightConfig {
    fn default() -> Self {
        Self {
            amount: 8,
            radius: 10.0,
            ambient: 0.5,
            position: Vec3::new(1.0, 5.0, -1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactShadowConfig {
    pub y: f32,
    /// Frames accumulated before the shadow is frozen.
    pub frames: u32,
    pub alpha_test: f32,
    pub scale: f32,
    pub light: RandomizedLightConfig,
}

impl Default for ContactShadowConfig {
    fn default() -> Self {
        Self {
            y: -1.16,
            frames: 100,
            alpha_test: 0.9,
            scale: 10.0,
            light: RandomizedLightConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Cube face size in pixels.
    pub resolution: u32,
    pub blur: f32,
    pub background: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            resolution: 256,
            blur: 1.0,
            background: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightformerForm {
    Rect,
    Circle,
    Ring,
}

/// An emissive card. `rotation` is XYZ Euler, radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lightformer {
    pub form: LightformerForm,
    pub intensity: f32,
    pub color: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Lightformer {
    #[must_use]
    pub fn rect(intensity: f32, position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            form: LightformerForm::Rect,
            intensity,
            color: WHITE,
            position,
            rotation,
            scale,
        }
    }

    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Affine3A::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// A row of circle cards sliding along +Z and wrapping back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Yaw of the whole group, radians.
    pub group_yaw: f32,
    pub x_offsets: Vec<f32>,
    pub y: f32,
    /// Z distance between consecutive cards.
    pub spacing: f32,
    pub intensity: f32,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Group Z units per second.
    pub speed: f32,
    pub wrap_above: f32,
    pub wrap_to: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            group_yaw: 0.5,
            x_offsets: vec![2.0, 0.0, 2.0, 0.0, 2.0, 0.0, 2.0, 0.0],
            y: 4.0,
            spacing: 4.0,
            intensity: 2.0,
            rotation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
            scale: Vec3::new(3.0, 1.0, 1.0),
            speed: 10.0,
            wrap_above: 20.0,
            wrap_to: -60.0,
        }
    }
}

/// Gentle bob and wobble, in the style of a floating prop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    pub speed: f32,
    pub float_intensity: f32,
    pub rotation_intensity: f32,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            float_intensity: 2.0,
            rotation_intensity: 2.0,
        }
    }
}

impl FloatConfig {
    /// Offset transform at `elapsed` seconds.
    #[must_use]
    pub fn offset(&self, elapsed: f32) -> Affine3A {
        let phase = elapsed / 4.0 * self.speed;
        let (s, c) = phase.sin_cos();
        let ri = self.rotation_intensity;
        let rotation = Quat::from_euler(EulerRot::XYZ, c / 8.0 * ri, s / 8.0 * ri, s / 20.0 * ri);
        let translation = Vec3::new(0.0, s / 10.0 * self.float_intensity, 0.0);
        Affine3A::from_rotation_translation(rotation, translation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub intensity: f32,
    pub color: Vec3,
    pub scale: f32,
    pub position: Vec3,
    /// The ring faces this point.
    pub target: Vec3,
    pub float: FloatConfig,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            color: Vec3::new(1.0, 0.0, 0.0),
            scale: 10.0,
            position: Vec3::new(-15.0, 4.0, -18.0),
            target: Vec3::ZERO,
            float: FloatConfig::default(),
        }
    }
}

/// Large back-faced sphere with a depth gradient layered over a base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub radius: f32,
    pub color: Vec3,
    pub gradient_near_color: Vec3,
    pub gradient_far_color: Vec3,
    pub gradient_alpha: f32,
    pub near: f32,
    pub far: f32,
    /// Point depth is measured from.
    pub origin: Vec3,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            color: Vec3::splat(f32::from(0x44_u8) / 255.0),
            gradient_near_color: Vec3::new(0.0, 0.0, 1.0),
            gradient_far_color: Vec3::ZERO,
            gradient_alpha: 0.5,
            near: 0.0,
            far: 300.0,
            origin: Vec3::splat(100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub spot_light: SpotLightConfig,
    pub ambient_intensity: f32,
    pub contact_shadows: ContactShadowConfig,
    pub environment: EnvironmentConfig,
    pub top_card: Lightformer,
    pub strips: Vec<Lightformer>,
    pub drift: DriftConfig,
    pub ring: RingConfig,
    pub backdrop: BackdropConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            spot_light: SpotLightConfig::default(),
            ambient_intensity: 0.5,
            contact_shadows: ContactShadowConfig::default(),
            environment: EnvironmentConfig::default(),
            top_card: Lightformer::rect(
                0.75,
                Vec3::new(0.0, 5.0, -9.0),
                Vec3::new(FRAC_PI_2, 0.0, 0.0),
                Vec3::new(10.0, 10.0, 1.0),
            ),
            strips: vec![
                Lightformer::rect(
                    4.0,
                    Vec3::new(-5.0, 1.0, -1.0),
                    Vec3::new(0.0, FRAC_PI_2, 0.0),
                    Vec3::new(20.0, 0.1, 1.0),
                ),
                Lightformer::rect(
                    1.0,
                    Vec3::new(-5.0, -1.0, -1.0),
                    Vec3::new(0.0, FRAC_PI_2, 0.0),
                    Vec3::new(20.0, 0.5, 1.0),
                ),
                Lightformer::rect(
                    1.0,
                    Vec3::new(10.0, 1.0, 0.0),
                    Vec3::new(0.0, -FRAC_PI_2, 0.0),
                    Vec3::new(20.0, 1.0, 1.0),
                ),
            ],
            drift: DriftConfig::default(),
            ring: RingConfig::default(),
            backdrop: BackdropConfig::default(),
        }
    }
}

/// A lightformer resolved to world space for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLightformer {
    pub form: LightformerForm,
    pub intensity: f32,
    pub color: Vec3,
    pub world: Affine3A,
}

impl PlacedLightformer {
    fn new(card: &Lightformer, world: Affine3A) -> Self {
        Self {
            form: card.form,
            intensity: card.intensity,
            color: card.color,
            world,
        }
    }
}

/// Animated studio state.
#[derive(Debug, Clone)]
pub struct Studio {
    config: StudioConfig,
    drift_z: f32,
    elapsed: f32,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

impl Studio {
    #[must_use]
    pub fn new(config: StudioConfig) -> Self {
        Self {
            config,
            drift_z: 0.0,
            elapsed: 0.0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Current Z offset of the drifting group.
    #[must_use]
    pub fn drift_z(&self) -> f32 {
        self.drift_z
    }

    pub fn update(&mut self, dt: f32, elapsed: f32) {
        let drift = &self.config.drift;
        self.drift_z += dt * drift.speed;
        if self.drift_z > drift.wrap_above {
            self.drift_z = drift.wrap_to;
        }
        self.elapsed = elapsed;
    }

    fn drifting_cards(&self) -> impl Iterator<Item = PlacedLightformer> + '_ {
        let drift = &self.config.drift;
        let group = Affine3A::from_rotation_translation(
            Quat::from_rotation_y(drift.group_yaw),
            Vec3::new(0.0, 0.0, self.drift_z),
        );
        drift.x_offsets.iter().enumerate().map(move |(i, &x)| {
            let card = Lightformer {
                form: LightformerForm::Circle,
                intensity: drift.intensity,
                color: WHITE,
                position: Vec3::new(x, drift.y, i as f32 * drift.spacing),
                rotation: drift.rotation,
                scale: drift.scale,
            };
            PlacedLightformer::new(&card, group * card.local_matrix())
        })
    }

    fn ring(&self) -> PlacedLightformer {
        let ring = &self.config.ring;
        let mut transform = Transform::from_trs(ring.position, Quat::IDENTITY, Vec3::splat(ring.scale));
        transform.look_at(ring.target, Vec3::Y);
        // Cards emit along +Z; look_at aims -Z.
        transform.rotation *= Quat::from_rotation_y(PI);

        let card = Lightformer {
            form: LightformerForm::Ring,
            intensity: ring.intensity,
            color: ring.color,
            position: ring.position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(ring.scale),
        };
        PlacedLightformer::new(&card, ring.float.offset(self.elapsed) * transform.local_matrix())
    }

    /// Every lightformer in world space: top card, drifting group, strips,
    /// then the ring.
    #[must_use]
    pub fn lightformers(&self) -> Vec<PlacedLightformer> {
        let top = &self.config.top_card;
        std::iter::once(PlacedLightformer::new(top, top.local_matrix()))
            .chain(self.drifting_cards())
            .chain(self.config.strips.iter().map(|s| PlacedLightformer::new(s, s.local_matrix())))
            .chain(std::iter::once(self.ring()))
            .collect()
    }
}
