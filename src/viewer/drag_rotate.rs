//! Drag-to-rotate
//!
//! Any primary-button drag anywhere in the window turns the model. The
//! state machine is [`DragRotate`]; [`DragRotateInteractor`] wires it to a
//! [`PointerSurface`] and owns the resulting listener registrations.
//!
//! ```text
//!   Idle --Down(Left)--> Dragging --Move--> Dragging
//!     ^                     |
//!     +-------Up(any)-------+
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::app::input::{PointerEvent, PointerEventKind};
use crate::app::pointer_surface::{ListenerGuard, PointerSurface};
use crate::scene::{Orientation, OrientationHandle};

/// Clamp ranges for the two rotation angles, in radians.
///
/// The shipped defaults (`yaw` in `[-360, 360]`, `pitch` in `[0, 360]`) are
/// so wide that realistic drags never reach them at the default
/// sensitivity; [`RotationBounds::symmetric_quarter_turn`] gives a tight
/// `[-PI/4, PI/4]` range on both axes instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationBounds {
    pub yaw_min: f32,
    pub yaw_max: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl Default for RotationBounds {
    fn default() -> Self {
        Self {
            yaw_min: -360.0,
            yaw_max: 360.0,
            pitch_min: 0.0,
            pitch_max: 360.0,
        }
    }
}

impl RotationBounds {
    #[must_use]
    pub fn symmetric_quarter_turn() -> Self {
        let q = std::f32::consts::FRAC_PI_4;
        Self {
            yaw_min: -q,
            yaw_max: q,
            pitch_min: -q,
            pitch_max: q,
        }
    }

    /// Pins both angles into range. A reversed range pins to `min`
    /// (`f32::clamp` would panic on it).
    #[must_use]
    #[allow(clippy::manual_clamp)]
    pub fn clamp(&self, orientation: Orientation) -> Orientation {
        Orientation {
            pitch: orientation.pitch.min(self.pitch_max).max(self.pitch_min),
            yaw: orientation.yaw.min(self.yaw_max).max(self.yaw_min),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragRotateConfig {
    /// Radians per pixel of pointer travel.
    pub sensitivity: f32,
    pub bounds: RotationBounds,
}

impl Default for DragRotateConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.000_05,
            bounds: RotationBounds::default(),
        }
    }
}

/// Live drag: the pointer position the next delta is measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub anchor: Vec2,
}

/// The Idle/Dragging state machine.
#[derive(Debug, Clone, Default)]
pub struct DragRotate {
    config: DragRotateConfig,
    session: Option<DragSession>,
}

impl DragRotate {
    #[must_use]
    pub fn new(config: DragRotateConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DragRotateConfig {
        &self.config
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Feeds one event. Returns `true` when `orientation` was written.
    pub fn handle(&mut self, event: &PointerEvent, orientation: &mut Orientation) -> bool {
        match *event {
            PointerEvent::Down { button, position } => {
                if button.is_primary() {
                    self.session = Some(DragSession { anchor: position });
                }
                false
            }
            PointerEvent::Move { position } => {
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                let delta = position - session.anchor;
                session.anchor = position;

                let k = self.config.sensitivity;
                let turned = Orientation {
                    pitch: orientation.pitch + delta.y * k,
                    yaw: orientation.yaw + delta.x * k,
                };
                *orientation = self.config.bounds.clamp(turned);
                true
            }
            PointerEvent::Up { .. } => {
                self.session = None;
                false
            }
        }
    }
}

/// A [`DragRotate`] attached to a pointer surface and a model orientation.
///
/// Holds one listener per pointer event kind. They are registered in
/// [`attach`](Self::attach) and removed when the interactor is dropped or
/// [`detach`](Self::detach)ed; nothing else registers or removes them.
pub struct DragRotateInteractor {
    state: Rc<RefCell<DragRotate>>,
    target: OrientationHandle,
    _listeners: [ListenerGuard; 3],
}

impl std::fmt::Debug for DragRotateInteractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragRotateInteractor")
            .field("state", &self.state.borrow())
            .field("target", &self.target.get())
            .finish_non_exhaustive()
    }
}

impl DragRotateInteractor {
    #[must_use]
    pub fn attach(surface: &PointerSurface, config: DragRotateConfig, target: OrientationHandle) -> Self {
        let state = Rc::new(RefCell::new(DragRotate::new(config)));

        let listen = |kind: PointerEventKind| {
            let state = Rc::clone(&state);
            let target = target.clone();
            surface.add_listener(kind, move |event| {
                target.update(|orientation| {
                    state.borrow_mut().handle(event, orientation);
                });
            })
        };
        let listeners = [
            listen(PointerEventKind::Down),
            listen(PointerEventKind::Move),
            listen(PointerEventKind::Up),
        ];

        log::debug!("Drag-rotate attached");
        Self {
            state,
            target,
            _listeners: listeners,
        }
    }

    /// Releases the listeners. Same as dropping the interactor.
    pub fn detach(self) {
        log::debug!("Drag-rotate detached");
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.target.get()
    }
}
