use std::sync::Arc;

use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::animation::tracks::KeyframeCursor;

/// Looping playback instance of one clip inside a mixer.
///
/// `enabled` says whether the action participates at all (stopped actions
/// are disabled and rewound). `paused` freezes `time` in place while the
/// action stays enabled.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub paused: bool,
    pub enabled: bool,

    pub bindings: Vec<PropertyBinding>,

    pub(crate) track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    /// Creates a stopped action for `clip`.
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            paused: false,
            enabled: false,
            bindings: Vec::new(),
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Starts (or keeps) the action running from its current time.
    pub fn play(&mut self) {
        self.enabled = true;
    }

    /// Disables the action and rewinds it to the start.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.paused = false;
        self.time = 0.0;
        self.track_cursors.fill(KeyframeCursor::default());
    }

    /// Enabled, whether or not it is paused.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled
    }

    /// Enabled and advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && !self.paused
    }

    /// Advances local time by `dt`, wrapping at the clip's end. No-op while
    /// stopped or paused, or for a zero-length clip.
    pub fn update(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time = (self.time + dt).rem_euclid(duration);
    }
}
