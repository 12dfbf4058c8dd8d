//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step/cubic sampling, with and without a cursor
//! - AnimationAction looping, pause and stop
//! - AnimationClip duration
//! - AnimationMixer binding and application to scene nodes

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Quat, Vec3};

use turntable::animation::{
    AnimationAction, AnimationClip, AnimationMixer, Binder, InterpolationMode, KeyframeCursor, KeyframeTrack,
    TargetPath, Track, TrackData, TrackMeta,
};
use turntable::scene::{Node, Scene};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn ramp() -> KeyframeTrack<f32> {
    KeyframeTrack::new(vec![0.0, 1.0, 2.0], vec![0.0_f32, 10.0, 20.0], InterpolationMode::Linear)
}

fn translation_track(node: &str, times: Vec<f32>, values: Vec<Vec3>) -> Track {
    Track {
        meta: TrackMeta {
            node_name: node.into(),
            target: TargetPath::Translation,
        },
        data: TrackData::Vector3(KeyframeTrack::new(times, values, InterpolationMode::Linear)),
    }
}

fn make_simple_clip(duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new(
        "simple",
        vec![translation_track("Body", vec![0.0, duration], vec![Vec3::ZERO, Vec3::X])],
    ))
}

fn playing(clip: Arc<AnimationClip>) -> AnimationAction {
    let mut action = AnimationAction::new(clip);
    action.play();
    action
}

// ============================================================================
// KeyframeTrack
// ============================================================================

#[test]
fn track_linear_midpoint() {
    let value = ramp().sample(0.5);
    assert!(value.is_some_and(|v| approx(v, 5.0)), "got {value:?}");
}

#[test]
fn track_linear_exact_keyframes() {
    let track = ramp();
    for (t, expected) in [(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)] {
        let v = track.sample(t).unwrap_or(f32::NAN);
        assert!(approx(v, expected), "t={t}: expected {expected}, got {v}");
    }
}

#[test]
fn track_clamps_outside_range() {
    let track = ramp();
    assert!(track.sample(-1.0).is_some_and(|v| approx(v, 0.0)));
    assert!(track.sample(5.0).is_some_and(|v| approx(v, 20.0)));
}

#[test]
fn track_step_holds_value() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![3.0_f32, 7.0], InterpolationMode::Step);
    assert!(track.sample(0.99).is_some_and(|v| approx(v, 3.0)));
    assert!(track.sample(1.0).is_some_and(|v| approx(v, 7.0)));
}

#[test]
fn track_quat_slerp_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Quat::IDENTITY, Quat::from_rotation_y(FRAC_PI_2)],
        InterpolationMode::Linear,
    );
    let q = track.sample(0.5).unwrap_or(Quat::IDENTITY);
    let expected = Quat::from_rotation_y(FRAC_PI_2 / 2.0);
    assert!(q.angle_between(expected) < 1e-4);
}

#[test]
fn track_cubic_hits_keyframe_values() {
    // (in-tangent, value, out-tangent) per keyframe
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 1.0, 0.0, 0.0, 5.0, 0.0],
        InterpolationMode::CubicSpline,
    );
    assert!(track.sample(0.0).is_some_and(|v| approx(v, 1.0)));
    assert!(track.sample(1.0).is_some_and(|v| approx(v, 5.0)));
    // Flat tangents: smoothstep between the two values.
    assert!(track.sample(0.5).is_some_and(|v| approx(v, 3.0)));
}

#[test]
fn empty_track_samples_none() {
    let track: KeyframeTrack<f32> = KeyframeTrack::new(Vec::new(), Vec::new(), InterpolationMode::Linear);
    assert!(track.sample(0.0).is_none());
    assert!(track.sample_with_cursor(0.0, &mut KeyframeCursor::default()).is_none());
    assert!(approx(track.end_time(), 0.0));
}

#[test]
fn cursor_matches_stateless_sampling() {
    let track = KeyframeTrack::new(
        (0..20).map(|i| i as f32 * 0.25).collect(),
        (0..20).map(|i| (i * i) as f32).collect(),
        InterpolationMode::Linear,
    );
    let mut cursor = KeyframeCursor::default();

    // Forward, then a jump back as on a loop wrap.
    let times = (0..60).map(|i| i as f32 * 0.08).chain([0.1, 2.3, 0.0, 4.9]);
    for t in times {
        let with_cursor = track.sample_with_cursor(t, &mut cursor);
        let stateless = track.sample(t);
        assert_eq!(with_cursor, stateless, "t={t}");
    }
}

// ============================================================================
// AnimationAction
// ============================================================================

#[test]
fn new_action_is_stopped() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    assert!(!action.is_active());

    action.update(1.0);
    assert!(approx(action.time, 0.0));
}

#[test]
fn action_loop_mode_loop() {
    let mut action = playing(make_simple_clip(2.0));

    action.update(2.5);

    assert!(approx(action.time, 0.5), "Loop: should wrap to 0.5, got {}", action.time);
    assert!(!action.paused);
}

#[test]
fn action_loop_wraps_repeatedly() {
    let mut action = playing(make_simple_clip(2.0));

    for _ in 0..5 {
        action.update(0.9);
    }

    assert!(approx(action.time, 0.5), "got {}", action.time);
}

#[test]
fn action_paused_no_update() {
    let mut action = playing(make_simple_clip(2.0));
    action.time = 0.5;
    action.paused = true;

    action.update(1.0);

    assert!(approx(action.time, 0.5));
    assert!(action.is_active());
    assert!(!action.is_running());
}

#[test]
fn action_stop_rewinds() {
    let mut action = playing(make_simple_clip(2.0));
    action.update(1.2);
    action.paused = true;

    action.stop();

    assert!(approx(action.time, 0.0));
    assert!(!action.paused);
    assert!(!action.is_active());
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_is_latest_keyframe() {
    let clip = AnimationClip::new(
        "multi",
        vec![
            translation_track("A", vec![0.0, 1.5], vec![Vec3::ZERO, Vec3::ONE]),
            translation_track("B", vec![0.0, 3.25], vec![Vec3::ZERO, Vec3::ONE]),
        ],
    );
    assert!(approx(clip.duration, 3.25));
}

#[test]
fn clip_without_tracks_has_zero_duration() {
    let clip = AnimationClip::new("empty", Vec::new());
    assert!(approx(clip.duration, 0.0));
}

// ============================================================================
// Binder & AnimationMixer
// ============================================================================

fn rigged_scene() -> (Scene, turntable::scene::NodeHandle) {
    let mut scene = Scene::new();
    let root = scene.add_node(Node::new("car"));
    let body = scene.add_to_parent(Node::new("Body"), root);
    scene.add_to_parent(Node::new("Wheel"), body);
    (scene, root)
}

#[test]
fn binder_skips_unknown_nodes() {
    let (scene, root) = rigged_scene();
    let clip = AnimationClip::new(
        "partial",
        vec![
            translation_track("Wheel", vec![0.0, 1.0], vec![Vec3::ZERO, Vec3::ONE]),
            translation_track("Spoiler", vec![0.0, 1.0], vec![Vec3::ZERO, Vec3::ONE]),
        ],
    );

    let bindings = Binder::bind(&scene, root, &clip);

    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].track_index, 0);
    assert_eq!(Some(bindings[0].node), scene.find_node_by_name(root, "Wheel"));
}

#[test]
fn mixer_applies_running_actions_only() {
    let (mut scene, root) = rigged_scene();
    let body = scene.find_node_by_name(root, "Body").expect("body");
    let slide = Arc::new(AnimationClip::new(
        "slide",
        vec![translation_track("Body", vec![0.0, 2.0], vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)])],
    ));
    let lift = Arc::new(AnimationClip::new(
        "lift",
        vec![translation_track("Body", vec![0.0, 2.0], vec![Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0)])],
    ));
    let mut mixer = AnimationMixer::for_clips(&scene, root, &[slide, lift]);
    assert_eq!(mixer.len(), 2);

    mixer.play(0);
    mixer.update(1.0, &mut scene);

    let position = scene.get_node(body).map(|n| n.transform.position);
    assert!(position.is_some_and(|p| p.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPSILON)));
    assert!(mixer.action(1).is_some_and(|a| approx(a.time, 0.0)));
}

#[test]
fn mixer_pause_all_freezes_time() {
    let (mut scene, root) = rigged_scene();
    let mut mixer = AnimationMixer::for_clips(&scene, root, &[make_simple_clip(2.0)]);
    mixer.play(0);
    mixer.update(0.5, &mut scene);

    mixer.set_paused_all(true);
    mixer.update(1.0, &mut scene);

    assert!(mixer.action(0).is_some_and(|a| approx(a.time, 0.5)));
}

#[test]
fn mixer_out_of_range_play_is_ignored() {
    let (scene, root) = rigged_scene();
    let mut mixer = AnimationMixer::for_clips(&scene, root, &[make_simple_clip(1.0)]);

    mixer.play(7);

    assert!(mixer.actions().all(|a| !a.is_active()));
}
