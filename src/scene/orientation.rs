use std::cell::Cell;
use std::rc::Rc;

use glam::{EulerRot, Quat};

/// Model rotation as two independent angles (radians): `pitch` about X and
/// `yaw` about Y. Stored as raw angles rather than a quaternion so clamping
/// works on the values the user actually dragged to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

/// Shared handle to the orientation that lives on a loaded asset.
///
/// The asset owns the value; pointer listeners hold clones of the handle and
/// write through it. Everything runs on the UI thread, hence `Rc<Cell<_>>`.
#[derive(Debug, Clone, Default)]
pub struct OrientationHandle(Rc<Cell<Orientation>>);

impl OrientationHandle {
    #[must_use]
    pub fn new(initial: Orientation) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    #[must_use]
    pub fn get(&self) -> Orientation {
        self.0.get()
    }

    pub fn set(&self, value: Orientation) {
        self.0.set(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut Orientation)) {
        let mut value = self.0.get();
        f(&mut value);
        self.0.set(value);
    }
}
