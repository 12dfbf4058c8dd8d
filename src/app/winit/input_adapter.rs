//! Winit input adapter
//!
//! Translates winit window events into platform-agnostic [`PointerEvent`]s.

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};

use crate::app::input::{MouseButton, PointerEvent};

#[must_use]
pub fn translate_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Back,
        winit::event::MouseButton::Forward => MouseButton::Forward,
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

/// Winit reports button presses without a position, so the adapter keeps
/// the last cursor position and stamps it onto button events.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerAdapter {
    cursor: Vec2,
}

impl PointerAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Returns the pointer event for `event`, or `None` for anything that is
    /// not pointer input.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(PointerEvent::Move { position: self.cursor })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = translate_mouse_button(*button);
                let position = self.cursor;
                Some(match state {
                    ElementState::Pressed => PointerEvent::Down { button, position },
                    ElementState::Released => PointerEvent::Up { button, position },
                })
            }
            _ => None,
        }
    }
}
