//! Scene graph: slotmap-backed nodes, TRS transforms and the viewer camera.

pub mod camera;
pub mod node;
pub mod orientation;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod transform;

slotmap::new_key_type! {
    /// Stable handle to a [`Node`] inside a [`Scene`].
    pub struct NodeHandle;
}

pub use camera::Camera;
pub use node::Node;
pub use orientation::{Orientation, OrientationHandle};
pub use scene::Scene;
pub use transform::Transform;
