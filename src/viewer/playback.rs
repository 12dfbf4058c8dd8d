//! Clip selection and play/pause.
//!
//! [`AnimationController`] owns the [`PlaybackState`] and the mixer bound to
//! the current asset. Exactly one action (the one at `active_clip`) is
//! active; `is_playing` only decides whether time moves.

use crate::animation::{AnimationAction, AnimationMixer};
use crate::assets::{AssetId, SceneAsset};
use crate::scene::Scene;
use crate::viewer::panel::PlaybackCommands;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub active_clip: usize,
    pub is_playing: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            active_clip: 0,
            is_playing: true,
        }
    }
}

/// Observable state of one clip's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipState {
    Playing,
    Paused,
    Stopped,
}

impl From<&AnimationAction> for ClipState {
    fn from(action: &AnimationAction) -> Self {
        match (action.is_active(), action.paused) {
            (false, _) => ClipState::Stopped,
            (true, true) => ClipState::Paused,
            (true, false) => ClipState::Playing,
        }
    }
}

#[derive(Debug, Default)]
pub struct AnimationController {
    state: PlaybackState,
    mixer: Option<AnimationMixer>,
    bound_asset: Option<AssetId>,
}

impl AnimationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(state: PlaybackState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Clips in the bound asset; zero before any asset is ready.
    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.mixer.as_ref().map_or(0, AnimationMixer::len)
    }

    #[must_use]
    pub fn bound_asset(&self) -> Option<AssetId> {
        self.bound_asset
    }

    #[must_use]
    pub fn mixer(&self) -> Option<&AnimationMixer> {
        self.mixer.as_ref()
    }

    #[must_use]
    pub fn active_action(&self) -> Option<&AnimationAction> {
        self.mixer.as_ref()?.action(self.state.active_clip)
    }

    /// Per-clip state in clip order. Empty before any asset is ready.
    #[must_use]
    pub fn clip_states(&self) -> Vec<ClipState> {
        self.mixer
            .iter()
            .flat_map(AnimationMixer::actions)
            .map(ClipState::from)
            .collect()
    }

    /// Makes `index` the active clip and resumes playback.
    ///
    /// The previously active clip is stopped (rewound). Selecting the clip
    /// that is already active keeps its time position. `index` must be a
    /// valid clip index for the bound asset; an invalid one is ignored.
    pub fn select_clip(&mut self, index: usize) {
        debug_assert!(
            self.mixer.is_none() || index < self.clip_count(),
            "clip index {index} out of range ({} clips)",
            self.clip_count()
        );
        if self.mixer.is_some() && index >= self.clip_count() {
            log::warn!("Ignoring clip index {index} ({} clips)", self.clip_count());
            return;
        }

        let previous = self.state.active_clip;
        self.state = PlaybackState {
            active_clip: index,
            is_playing: true,
        };
        log::debug!("Select clip {previous} -> {index}");

        let Some(mixer) = self.mixer.as_mut() else {
            return;
        };
        if previous != index {
            mixer.stop(previous);
        }
        mixer.play(index);
        mixer.set_paused_all(false);
    }

    /// Flips play/pause. The active clip and its time are untouched.
    pub fn toggle_playback(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        log::debug!("Playback {}", if self.state.is_playing { "resumed" } else { "paused" });

        if let Some(mixer) = self.mixer.as_mut() {
            mixer.set_paused_all(!self.state.is_playing);
        }
    }

    /// Binds a fresh mixer to `asset`, replacing (and first stopping) any
    /// previous one, then re-applies the current selection and pause state.
    pub fn on_asset_ready(&mut self, asset: &SceneAsset) {
        self.teardown();

        let mut mixer = AnimationMixer::for_clips(&asset.scene, asset.root, asset.clips());
        for index in 0..mixer.len() {
            if index == self.state.active_clip {
                mixer.play(index);
            } else {
                mixer.stop(index);
            }
        }
        mixer.set_paused_all(!self.state.is_playing);

        if self.state.active_clip >= mixer.len() && !mixer.is_empty() {
            log::warn!(
                "Active clip {} not present in '{}' ({} clips)",
                self.state.active_clip,
                asset.name,
                mixer.len()
            );
        }

        log::info!("Animation mixer bound to '{}' with {} clips", asset.name, mixer.len());
        self.mixer = Some(mixer);
        self.bound_asset = Some(asset.id());
    }

    /// Advances the active clip by `dt` seconds and writes it into `scene`.
    /// Frozen (not rewound) while paused; no-op without a mixer.
    pub fn on_frame(&mut self, dt: f32, scene: &mut Scene) {
        if !self.state.is_playing {
            return;
        }
        if let Some(mixer) = self.mixer.as_mut() {
            mixer.update(dt, scene);
        }
    }

    /// Stops every action and drops the mixer. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(mut mixer) = self.mixer.take() {
            mixer.stop_all();
            log::debug!("Animation mixer torn down");
        }
        self.bound_asset = None;
    }
}

impl PlaybackCommands for AnimationController {
    fn playback(&self) -> PlaybackState {
        self.state()
    }

    fn bound_clip_count(&self) -> Option<usize> {
        self.mixer.as_ref().map(AnimationMixer::len)
    }

    fn select_clip(&mut self, index: usize) {
        AnimationController::select_clip(self, index);
    }

    fn toggle_playback(&mut self) {
        AnimationController::toggle_playback(self);
    }
}
