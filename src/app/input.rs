//! Platform-agnostic pointer input
//!
//! Backend adapters (see [`crate::app::winit::input_adapter`]) translate
//! their native events into these types before dispatching them on a
//! [`PointerSurface`](crate::app::PointerSurface).

use glam::Vec2;

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary button. Only this one starts a drag.
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Discriminant of a [`PointerEvent`], used to subscribe to one kind only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// A pointer event in window client coordinates (pixels, origin top-left).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down { button: MouseButton, position: Vec2 },
    Move { position: Vec2 },
    Up { button: MouseButton, position: Vec2 },
}

impl PointerEvent {
    #[must_use]
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Down { .. } => PointerEventKind::Down,
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Up { .. } => PointerEventKind::Up,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => position,
        }
    }

    #[must_use]
    pub fn down(button: MouseButton, x: f32, y: f32) -> Self {
        PointerEvent::Down {
            button,
            position: Vec2::new(x, y),
        }
    }

    #[must_use]
    pub fn moved(x: f32, y: f32) -> Self {
        PointerEvent::Move {
            position: Vec2::new(x, y),
        }
    }

    #[must_use]
    pub fn up(button: MouseButton, x: f32, y: f32) -> Self {
        PointerEvent::Up {
            button,
            position: Vec2::new(x, y),
        }
    }
}
