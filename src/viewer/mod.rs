//! The car viewer
//!
//! [`Viewer`] composes the pieces that make up one interactive session:
//!
//! - [`playback`]: clip selection and play/pause over the asset's mixer
//! - [`drag_rotate`]: pointer drags turning the model
//! - [`camera_rig`]: the slowly drifting camera
//! - [`panel`]: egui buttons driving playback
//! - [`studio`]: lightformers and lighting data
//! - [`performance`]: the frame-rate watchdog
//! - [`config`]: everything above as one serde-loadable [`ViewerConfig`]
//!
//! Per frame, in order: the controller advances the active clip (when
//! playing), the model orientation is written into its root, the camera rig
//! eases the camera, the studio drifts its lightformers and the watchdog
//! samples the frame time.

pub mod camera_rig;
pub mod config;
pub mod drag_rotate;
pub mod panel;
pub mod performance;
pub mod playback;
pub mod studio;

pub use camera_rig::{CameraRig, CameraRigConfig};
pub use config::{CameraConfig, ModelPlacement, ViewerConfig};
pub use drag_rotate::{DragRotate, DragRotateConfig, DragRotateInteractor, RotationBounds};
pub use panel::{ButtonSpec, ControlPanel, PanelButton, PlaybackCommands};
pub use performance::{EnvironmentFrames, PerformanceConfig, PerformanceMonitor};
pub use playback::{AnimationController, ClipState, PlaybackState};
pub use studio::{PlacedLightformer, Studio, StudioConfig};

use crate::app::pointer_surface::PointerSurface;
use crate::app::surface::RenderSurface;
use crate::assets::SceneAsset;
use crate::scene::{Camera, Scene};

/// Read-only description of one frame, handed to a [`RenderSurface`].
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// The model's scene, once loaded.
    pub scene: Option<&'a Scene>,
    pub camera: &'a Camera,
    pub studio: &'a StudioConfig,
    /// World-space lightformers for this frame.
    pub lightformers: &'a [PlacedLightformer],
    pub environment_frames: EnvironmentFrames,
    pub playback: PlaybackState,
    pub elapsed: f32,
}

pub struct Viewer {
    config: ViewerConfig,
    asset: Option<SceneAsset>,
    controller: AnimationController,
    interactor: Option<DragRotateInteractor>,
    pointer: Option<PointerSurface>,
    camera: Camera,
    rig: CameraRig,
    studio: Studio,
    lightformers: Vec<PlacedLightformer>,
    performance: PerformanceMonitor,
    panel: ControlPanel,
    elapsed: f32,
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("asset", &self.asset.as_ref().map(|a| a.name.as_str()))
            .field("playback", &self.controller.state())
            .field("active", &self.is_active())
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        let studio = Studio::new(config.studio.clone());
        let lightformers = studio.lightformers();
        Self {
            asset: None,
            controller: AnimationController::new(),
            interactor: None,
            pointer: None,
            camera: config.camera.build(1.0),
            rig: CameraRig::new(config.camera_rig),
            studio,
            lightformers,
            performance: PerformanceMonitor::new(config.performance),
            panel: ControlPanel::new(config.clip_labels.iter().cloned()),
            elapsed: 0.0,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn asset(&self) -> Option<&SceneAsset> {
        self.asset.as_ref()
    }

    #[must_use]
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut AnimationController {
        &mut self.controller
    }

    #[must_use]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    #[must_use]
    pub fn performance(&self) -> &PerformanceMonitor {
        &self.performance
    }

    #[must_use]
    pub fn interactor(&self) -> Option<&DragRotateInteractor> {
        self.interactor.as_ref()
    }

    /// Whether the viewer is attached to a pointer surface.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pointer.is_some()
    }

    /// Takes ownership of a freshly loaded asset, replacing any previous one.
    ///
    /// The asset is placed in the studio, the controller rebinds to its clips
    /// and, while active, the drag interactor is re-attached to its
    /// orientation.
    pub fn set_asset(&mut self, mut asset: SceneAsset) {
        let placement = self.config.model;
        asset.place(placement.position, placement.scale, placement.orientation());
        asset.scene.update_world_matrices();

        self.interactor = None;
        self.controller.on_asset_ready(&asset);
        log::info!("Showing '{}' ({} clips)", asset.name, asset.clips().len());

        if let Some(pointer) = &self.pointer {
            self.interactor = Some(DragRotateInteractor::attach(
                pointer,
                self.config.drag,
                asset.orientation_handle(),
            ));
        }
        self.asset = Some(asset);
    }

    /// Starts listening for drags on `pointer`. Re-activating first
    /// deactivates.
    pub fn activate(&mut self, pointer: &PointerSurface) {
        self.deactivate();
        self.pointer = Some(pointer.clone());

        if let Some(asset) = &self.asset {
            if self.controller.bound_asset() != Some(asset.id()) {
                self.controller.on_asset_ready(asset);
            }
            self.interactor = Some(DragRotateInteractor::attach(
                pointer,
                self.config.drag,
                asset.orientation_handle(),
            ));
        }
        log::debug!("Viewer activated");
    }

    /// Detaches the interactor and tears down the controller. Idempotent.
    pub fn deactivate(&mut self) {
        if let Some(interactor) = self.interactor.take() {
            interactor.detach();
        }
        self.controller.teardown();
        if self.pointer.take().is_some() {
            log::debug!("Viewer deactivated");
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Advances everything time-driven by one frame.
    pub fn frame(&mut self, dt: f32, elapsed: f32) {
        self.elapsed = elapsed;

        if let Some(asset) = self.asset.as_mut() {
            self.controller.on_frame(dt, &mut asset.scene);
            asset.sync_root_transform();
            asset.scene.update_world_matrices();
        }

        self.rig.apply(&mut self.camera.transform, elapsed);
        self.studio.update(dt, elapsed);
        self.lightformers = self.studio.lightformers();
        self.performance.record(dt);
    }

    /// Draws the current state through `surface`, with the control panel in
    /// its UI pass.
    pub fn render(&mut self, surface: &mut dyn RenderSurface) {
        let Self {
            asset,
            controller,
            camera,
            studio,
            lightformers,
            performance,
            panel,
            elapsed,
            ..
        } = self;

        let view = FrameView {
            scene: asset.as_ref().map(|a| &a.scene),
            camera: &*camera,
            studio: studio.config(),
            lightformers: lightformers.as_slice(),
            environment_frames: performance.environment_frames(),
            playback: controller.state(),
            elapsed: *elapsed,
        };
        surface.draw(&view, &mut |ctx: &egui::Context| panel.show(ctx, &mut *controller));
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(feature = "winit")]
impl crate::app::winit::AppHandler for Viewer {
    fn activate(&mut self, pointer: &PointerSurface) {
        Viewer::activate(self, pointer);
    }

    fn resize(&mut self, width: u32, height: u32) {
        Viewer::resize(self, width, height);
    }

    fn update(&mut self, frame: &crate::app::FrameState) {
        self.frame(frame.dt, frame.time);
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        Viewer::render(self, surface);
    }

    fn deactivate(&mut self) {
        Viewer::deactivate(self);
    }
}
