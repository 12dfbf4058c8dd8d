use rustc_hash::FxHashMap;

use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::{NodeHandle, Scene};

/// Resolves clip tracks to scene nodes by node name.
pub struct Binder;

impl Binder {
    /// Binds every track of `clip` whose node exists under `root`.
    /// Tracks pointing at unknown nodes are skipped with a warning.
    #[must_use]
    pub fn bind(scene: &Scene, root: NodeHandle, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let names = Self::index_names(scene, root);

        clip.tracks
            .iter()
            .enumerate()
            .filter_map(|(track_index, track)| {
                let Some(&node) = names.get(track.meta.node_name.as_str()) else {
                    log::warn!(
                        "Clip '{}': no node named '{}', track skipped",
                        clip.name,
                        track.meta.node_name
                    );
                    return None;
                };
                Some(PropertyBinding {
                    track_index,
                    node,
                    target: track.meta.target,
                })
            })
            .collect()
    }

    fn index_names(scene: &Scene, root: NodeHandle) -> FxHashMap<&str, NodeHandle> {
        let mut names = FxHashMap::default();
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = scene.get_node(handle) else {
                continue;
            };
            // First match in depth-first order wins for duplicate names.
            names.entry(node.name.as_str()).or_insert(handle);
            stack.extend(node.children().iter().rev().copied());
        }
        names
    }
}
