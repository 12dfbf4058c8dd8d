//! Animation Controller Tests
//!
//! Tests for:
//! - select_clip: exactly one playing clip, previous clip rewound
//! - toggle_playback: involution, no effect on selection or time
//! - on_frame: frozen while paused
//! - on_asset_ready: selection applied on bind, old mixer stopped on rebind
//! - teardown: idempotent, leaves no mixer

use glam::Vec3;

use turntable::animation::{AnimationClip, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData, TrackMeta};
use turntable::assets::SceneAsset;
use turntable::scene::{Node, Scene};
use turntable::viewer::{AnimationController, ClipState, PlaybackState};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// A car body with `clip_count` clips, each sliding the body along X over
/// two seconds.
fn car_asset(clip_count: usize) -> SceneAsset {
    let mut scene = Scene::new();
    let root = scene.add_node(Node::new("car"));
    scene.add_to_parent(Node::new("Body"), root);

    let clips = (0..clip_count)
        .map(|i| {
            let track = KeyframeTrack::new(
                vec![0.0, 2.0],
                vec![Vec3::ZERO, Vec3::new(2.0 + i as f32, 0.0, 0.0)],
                InterpolationMode::Linear,
            );
            AnimationClip::new(
                format!("clip_{i}"),
                vec![Track {
                    meta: TrackMeta {
                        node_name: "Body".into(),
                        target: TargetPath::Translation,
                    },
                    data: TrackData::Vector3(track),
                }],
            )
        })
        .collect();

    SceneAsset::from_parts("car", scene, root, clips)
}

fn active_time(controller: &AnimationController) -> f32 {
    controller.active_action().map_or(-1.0, |a| a.time)
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn initial_state_plays_first_clip() {
    let asset = car_asset(6);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);

    assert_eq!(
        controller.state(),
        PlaybackState {
            active_clip: 0,
            is_playing: true
        }
    );
    let states = controller.clip_states();
    assert_eq!(states[0], ClipState::Playing);
    assert!(states[1..].iter().all(|s| *s == ClipState::Stopped));
}

#[test]
fn select_clip_two_of_six() {
    let asset = car_asset(6);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);

    controller.select_clip(2);

    assert_eq!(
        controller.state(),
        PlaybackState {
            active_clip: 2,
            is_playing: true
        }
    );
    assert_eq!(
        controller.clip_states(),
        vec![
            ClipState::Stopped,
            ClipState::Stopped,
            ClipState::Playing,
            ClipState::Stopped,
            ClipState::Stopped,
            ClipState::Stopped,
        ]
    );
}

#[test]
fn every_valid_index_leaves_exactly_one_playing() {
    let asset = car_asset(6);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);

    for i in [3, 0, 5, 5, 1, 4, 2] {
        controller.select_clip(i);
        let states = controller.clip_states();
        let playing: Vec<usize> = states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == ClipState::Playing)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(playing, vec![i]);
        assert_eq!(states.iter().filter(|s| **s == ClipState::Stopped).count(), 5);
        assert!(controller.state().is_playing);
    }
}

#[test]
fn select_while_paused_resumes() {
    let asset = car_asset(3);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);
    controller.toggle_playback();

    controller.select_clip(1);

    assert!(controller.state().is_playing);
    assert_eq!(controller.clip_states()[1], ClipState::Playing);
}

#[test]
fn switching_clip_rewinds_previous() {
    let mut asset = car_asset(3);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);
    controller.on_frame(0.5, &mut asset.scene);

    controller.select_clip(1);

    let previous = controller.mixer().and_then(|m| m.action(0)).map(|a| a.time);
    assert_eq!(previous, Some(0.0));
}

#[test]
fn reselecting_active_clip_keeps_time() {
    let mut asset = car_asset(3);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);
    controller.on_frame(0.75, &mut asset.scene);

    controller.select_clip(0);

    assert!(approx(active_time(&controller), 0.75));
    assert_eq!(controller.clip_states()[0], ClipState::Playing);
}

#[test]
fn select_before_asset_is_applied_on_bind() {
    let asset = car_asset(6);
    let mut controller = AnimationController::new();

    controller.select_clip(4);
    controller.on_asset_ready(&asset);

    assert_eq!(controller.state().active_clip, 4);
    assert_eq!(controller.clip_states()[4], ClipState::Playing);
    assert_eq!(controller.clip_states()[0], ClipState::Stopped);
}

// ============================================================================
// Play / pause
// ============================================================================

#[test]
fn toggle_twice_is_identity() {
    let mut asset = car_asset(6);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);
    controller.select_clip(3);
    controller.on_frame(0.4, &mut asset.scene);

    let before = controller.state();
    let time_before = active_time(&controller);

    controller.toggle_playback();
    assert!(!controller.state().is_playing);
    assert_eq!(controller.clip_states()[3], ClipState::Paused);

    controller.toggle_playback();
    assert_eq!(controller.state(), before);
    assert!(approx(active_time(&controller), time_before));
    assert_eq!(controller.clip_states()[3], ClipState::Playing);
}

#[test]
fn paused_frames_do_not_advance() {
    let mut asset = car_asset(2);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);
    controller.on_frame(0.25, &mut asset.scene);
    controller.toggle_playback();

    for dt in [0.0, 0.016, 0.5, 10.0] {
        controller.on_frame(dt, &mut asset.scene);
        assert!(approx(active_time(&controller), 0.25));
    }
}

#[test]
fn playing_frames_move_the_model() {
    let mut asset = car_asset(1);
    let body = asset.scene.find_node_by_name(asset.root, "Body").expect("body node");
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);

    controller.on_frame(1.0, &mut asset.scene);

    let x = asset.scene.get_node(body).map(|n| n.transform.position.x);
    assert!(x.is_some_and(|x| approx(x, 1.0)));
}

#[test]
fn frame_before_asset_is_noop() {
    let mut controller = AnimationController::new();
    let mut scene = Scene::new();
    controller.on_frame(1.0, &mut scene);
    assert_eq!(controller.clip_count(), 0);
    assert!(controller.clip_states().is_empty());
}

// ============================================================================
// Asset binding and teardown
// ============================================================================

#[test]
fn paused_state_survives_rebind() {
    let first = car_asset(2);
    let second = car_asset(2);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&first);
    controller.toggle_playback();

    controller.on_asset_ready(&second);

    assert_eq!(controller.bound_asset(), Some(second.id()));
    assert_eq!(controller.clip_states()[0], ClipState::Paused);
}

#[test]
fn rebind_replaces_mixer() {
    let mut first = car_asset(2);
    let second = car_asset(4);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&first);
    controller.on_frame(0.5, &mut first.scene);

    controller.on_asset_ready(&second);

    assert_eq!(controller.clip_count(), 4);
    assert!(approx(active_time(&controller), 0.0));
}

#[test]
fn teardown_is_idempotent() {
    let asset = car_asset(2);
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);

    controller.teardown();
    controller.teardown();

    assert!(controller.mixer().is_none());
    assert!(controller.bound_asset().is_none());
    assert_eq!(controller.state(), PlaybackState::default());
}

#[test]
fn asset_without_clips_binds_empty_mixer() {
    let asset = SceneAsset::empty("bare");
    let mut controller = AnimationController::new();
    controller.on_asset_ready(&asset);

    assert_eq!(controller.clip_count(), 0);
    assert!(controller.active_action().is_none());
}
