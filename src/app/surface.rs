//! Render surface hook
//!
//! The viewer never draws anything itself. Once per frame it hands a
//! read-only [`FrameView`] to a [`RenderSurface`], together with a callback
//! that builds the control panel into whatever egui context the surface
//! owns.

use crate::app::input::{MouseButton, PointerEvent};
use crate::viewer::FrameView;

/// Draws one frame.
pub trait RenderSurface {
    /// Called when the window's drawable size changes.
    #[allow(unused_variables)]
    fn resize(&mut self, width: u32, height: u32) {}

    /// Pointer input for the surface's own UI layer. Called before the
    /// event reaches the window-wide pointer listeners.
    #[allow(unused_variables)]
    fn pointer(&mut self, event: &PointerEvent) {}

    /// Draws the scene described by `frame`, running `ui` inside the
    /// surface's egui pass.
    fn draw(&mut self, frame: &FrameView<'_>, ui: &mut dyn FnMut(&egui::Context));
}

/// A surface with no GPU behind it.
///
/// Runs the egui pass (so the panel receives clicks and produces shapes) and
/// traces the frame description at `debug` level.
#[derive(Default)]
pub struct HeadlessSurface {
    egui_ctx: egui::Context,
    pending: Vec<egui::Event>,
    frames_drawn: u64,
    last_shape_count: usize,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn context(&self) -> &egui::Context {
        &self.egui_ctx
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Number of egui shapes produced by the last pass.
    #[must_use]
    pub fn last_shape_count(&self) -> usize {
        self.last_shape_count
    }
}

fn egui_button(button: MouseButton) -> Option<egui::PointerButton> {
    match button {
        MouseButton::Left => Some(egui::PointerButton::Primary),
        MouseButton::Right => Some(egui::PointerButton::Secondary),
        MouseButton::Middle => Some(egui::PointerButton::Middle),
        MouseButton::Back => Some(egui::PointerButton::Extra1),
        MouseButton::Forward => Some(egui::PointerButton::Extra2),
        MouseButton::Other(_) => None,
    }
}

impl RenderSurface for HeadlessSurface {
    fn pointer(&mut self, event: &PointerEvent) {
        let pos = egui::pos2(event.position().x, event.position().y);
        let translated = match *event {
            PointerEvent::Move { .. } => Some(egui::Event::PointerMoved(pos)),
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => {
                egui_button(button).map(|button| egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: matches!(event, PointerEvent::Down { .. }),
                    modifiers: egui::Modifiers::default(),
                })
            }
        };
        self.pending.extend(translated);
    }

    fn draw(&mut self, frame: &FrameView<'_>, ui: &mut dyn FnMut(&egui::Context)) {
        let raw_input = egui::RawInput {
            events: std::mem::take(&mut self.pending),
            ..Default::default()
        };
        self.egui_ctx.begin_pass(raw_input);
        ui(&self.egui_ctx);
        let output = self.egui_ctx.end_pass();

        self.frames_drawn += 1;
        self.last_shape_count = output.shapes.len();

        log::debug!(
            "frame {}: t={:.2}s nodes={} camera={:?} lightformers={} env={:?} playback={:?} ui_shapes={}",
            self.frames_drawn,
            frame.elapsed,
            frame.scene.map_or(0, crate::scene::Scene::node_count),
            frame.camera.transform.position,
            frame.lightformers.len(),
            frame.environment_frames,
            frame.playback,
            self.last_shape_count,
        );
    }
}
