//! Window-wide pointer listener registry
//!
//! Every listener added here is owned by the [`ListenerGuard`] returned from
//! [`PointerSurface::add_listener`]. Dropping the guard removes the listener,
//! so a component that keeps its guards for its own lifetime can never leave
//! a listener behind, nor remove one twice.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::app::input::{PointerEvent, PointerEventKind};

slotmap::new_key_type! {
    /// Identifies one registered listener.
    pub struct ListenerKey;
}

type Callback = Box<dyn FnMut(&PointerEvent)>;

struct Listener {
    kind: PointerEventKind,
    /// Taken out while the callback runs, so a callback may add or remove
    /// listeners without a double borrow.
    callback: Option<Callback>,
}

type Registry = RefCell<SlotMap<ListenerKey, Listener>>;

/// The global input surface: pointer events for the whole window, not for
/// any particular element.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct PointerSurface {
    registry: Rc<Registry>,
}

impl std::fmt::Debug for PointerSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PointerSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for events of `kind`. The listener stays
    /// registered exactly as long as the returned guard lives.
    #[must_use = "dropping the guard removes the listener immediately"]
    pub fn add_listener(
        &self,
        kind: PointerEventKind,
        callback: impl FnMut(&PointerEvent) + 'static,
    ) -> ListenerGuard {
        let key = self.registry.borrow_mut().insert(Listener {
            kind,
            callback: Some(Box::new(callback)),
        });
        log::debug!("Pointer listener {key:?} added ({kind:?})");
        ListenerGuard {
            key,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener registered for its kind.
    pub fn dispatch(&self, event: &PointerEvent) {
        let kind = event.kind();
        let keys: SmallVec<[ListenerKey; 8]> = self
            .registry
            .borrow()
            .iter()
            .filter(|(_, l)| l.kind == kind)
            .map(|(key, _)| key)
            .collect();

        for key in keys {
            let taken = self
                .registry
                .borrow_mut()
                .get_mut(key)
                .and_then(|l| l.callback.take());
            let Some(mut callback) = taken else {
                continue;
            };

            callback(event);

            // The listener may have been removed while it ran.
            if let Some(listener) = self.registry.borrow_mut().get_mut(key) {
                listener.callback = Some(callback);
            }
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().len()
    }
}

/// Owns one registered listener; removes it on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    key: ListenerKey,
    registry: Weak<Registry>,
}

impl ListenerGuard {
    #[must_use]
    pub fn key(&self) -> ListenerKey {
        self.key
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The surface may already be gone at shutdown.
        if let Some(registry) = self.registry.upgrade()
            && registry.borrow_mut().remove(self.key).is_some()
        {
            log::debug!("Pointer listener {:?} removed", self.key);
        }
    }
}
