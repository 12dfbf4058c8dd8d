//! Keyframe animation: tracks, clips, per-clip actions and the mixer that
//! writes sampled values into scene nodes.

pub mod action;
pub mod binder;
pub mod binding;
pub mod clip;
pub mod mixer;
pub mod tracks;
pub mod values;

pub use action::AnimationAction;
pub use binder::Binder;
pub use binding::{PropertyBinding, TargetPath};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use mixer::AnimationMixer;
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
