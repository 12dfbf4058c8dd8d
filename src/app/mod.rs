//! Application layer
//!
//! - [`input`]: platform-agnostic pointer events
//! - [`pointer_surface`]: window-wide listener registry with scoped guards
//! - [`surface`]: the [`RenderSurface`] hook frames are drawn through
//! - `winit`: the windowed runner (feature `winit`)

pub mod input;
pub mod pointer_surface;
pub mod surface;

#[cfg(feature = "winit")]
pub mod winit;

pub use input::{MouseButton, PointerEvent, PointerEventKind};
pub use pointer_surface::{ListenerGuard, ListenerKey, PointerSurface};
pub use surface::{HeadlessSurface, RenderSurface};

/// Per-frame timing handed to the application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    /// Seconds since the window came up.
    pub time: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Frames rendered so far, including this one.
    pub frame_count: u64,
}
