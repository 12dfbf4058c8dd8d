use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

use crate::animation::AnimationClip;
use crate::scene::{Node, NodeHandle, Orientation, OrientationHandle, Scene};

static NEXT_ASSET_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a loaded asset. Two loads of the same file get different ids,
/// so consumers can tell when the asset behind them was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(u64);

impl AssetId {
    fn next() -> Self {
        Self(NEXT_ASSET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A loaded model: its node tree under a single synthetic root, and the
/// animation clips bundled with it.
///
/// The root carries the placement (position/scale) and the user-driven
/// [`Orientation`], which is written into the root's rotation by
/// [`SceneAsset::sync_root_transform`].
#[derive(Debug)]
pub struct SceneAsset {
    id: AssetId,
    pub name: String,
    pub scene: Scene,
    pub root: NodeHandle,
    clips: Vec<Arc<AnimationClip>>,
    orientation: OrientationHandle,
}

impl SceneAsset {
    /// Wraps an already-built scene. `root` must be a node of `scene`.
    #[must_use]
    pub fn from_parts(
        name: impl Into<String>,
        scene: Scene,
        root: NodeHandle,
        clips: Vec<AnimationClip>,
    ) -> Self {
        Self {
            id: AssetId::next(),
            name: name.into(),
            scene,
            root,
            clips: clips.into_iter().map(Arc::new).collect(),
            orientation: OrientationHandle::default(),
        }
    }

    /// Creates an empty asset with only a root node. Useful for procedural
    /// content and tests.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut scene = Scene::new();
        let root = scene.add_node(Node::new(name.clone()));
        Self::from_parts(name, scene, root, Vec::new())
    }

    #[must_use]
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// The clip set, in file order. Immutable after load.
    #[must_use]
    pub fn clips(&self) -> &[Arc<AnimationClip>] {
        &self.clips
    }

    #[must_use]
    pub fn orientation_handle(&self) -> OrientationHandle {
        self.orientation.clone()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    /// Sets root position, uniform scale and starting orientation.
    pub fn place(&mut self, position: Vec3, scale: f32, orientation: Orientation) {
        self.orientation.set(orientation);
        if let Some(root) = self.scene.get_node_mut(self.root) {
            root.transform.position = position;
            root.transform.scale = Vec3::splat(scale);
        }
        self.sync_root_transform();
    }

    /// Copies the current orientation into the root node's rotation.
    pub fn sync_root_transform(&mut self) {
        let rotation = self.orientation.get().to_quat();
        if let Some(root) = self.scene.get_node_mut(self.root) {
            root.transform.rotation = rotation;
        }
    }
}
