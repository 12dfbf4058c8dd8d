use std::sync::Arc;

use crate::animation::action::AnimationAction;
use crate::animation::binder::Binder;
use crate::animation::binding::TargetPath;
use crate::animation::clip::{AnimationClip, TrackData};
use crate::scene::{NodeHandle, Scene};

/// Advances a set of clip actions bound to one scene subtree and writes the
/// sampled values into the node transforms.
///
/// Actions are addressed by the index of their clip in the asset's clip set.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    /// Builds a mixer with one stopped action per clip, bound to the nodes
    /// under `root`.
    #[must_use]
    pub fn for_clips(scene: &Scene, root: NodeHandle, clips: &[Arc<AnimationClip>]) -> Self {
        let actions = clips
            .iter()
            .map(|clip| {
                let mut action = AnimationAction::new(Arc::clone(clip));
                action.bindings = Binder::bind(scene, root, clip);
                action
            })
            .collect();
        Self { actions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&AnimationAction> {
        self.actions.get(index)
    }

    pub fn actions(&self) -> impl Iterator<Item = &AnimationAction> {
        self.actions.iter()
    }

    pub fn play(&mut self, index: usize) {
        match self.actions.get_mut(index) {
            Some(action) => action.play(),
            None => log::warn!("play: no action at index {index} ({} clips)", self.actions.len()),
        }
    }

    pub fn stop(&mut self, index: usize) {
        if let Some(action) = self.actions.get_mut(index) {
            action.stop();
        }
    }

    pub fn stop_all(&mut self) {
        self.actions.iter_mut().for_each(AnimationAction::stop);
    }

    pub fn set_paused_all(&mut self, paused: bool) {
        for action in &mut self.actions {
            action.paused = paused;
        }
    }

    /// Advances every running action by `dt` and applies the results.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        for action in &mut self.actions {
            if !action.is_running() {
                continue;
            }
            action.update(dt);

            let time = action.time;
            let clip = Arc::clone(action.clip());

            for binding in &action.bindings {
                let track = &clip.tracks[binding.track_index];
                let cursor = &mut action.track_cursors[binding.track_index];
                let Some(node) = scene.get_node_mut(binding.node) else {
                    continue;
                };
                let transform = &mut node.transform;

                match (&track.data, binding.target) {
                    (TrackData::Vector3(t), TargetPath::Translation) => {
                        if let Some(v) = t.sample_with_cursor(time, cursor) {
                            transform.position = v;
                        }
                    }
                    (TrackData::Vector3(t), TargetPath::Scale) => {
                        if let Some(v) = t.sample_with_cursor(time, cursor) {
                            transform.scale = v;
                        }
                    }
                    (TrackData::Quaternion(t), TargetPath::Rotation) => {
                        if let Some(q) = t.sample_with_cursor(time, cursor) {
                            transform.rotation = q;
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
