//! Drag-Rotate Tests
//!
//! Tests for:
//! - Exact delta * sensitivity updates over a down/move/up sequence
//! - Idle moves and post-release moves
//! - Clamping at both ends of each axis
//! - Listener ownership: attach registers three, drop/detach removes all

use glam::Vec2;

use turntable::app::{MouseButton, PointerEvent, PointerEventKind, PointerSurface};
use turntable::scene::{Orientation, OrientationHandle};
use turntable::viewer::{DragRotate, DragRotateConfig, DragRotateInteractor, RotationBounds};

const K: f32 = 0.000_05;
const EPSILON: f32 = 1e-7;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn drag(surface: &PointerSurface, from: Vec2, to: Vec2) {
    surface.dispatch(&PointerEvent::down(MouseButton::Left, from.x, from.y));
    surface.dispatch(&PointerEvent::moved(to.x, to.y));
    surface.dispatch(&PointerEvent::up(MouseButton::Left, to.x, to.y));
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn single_drag_applies_exact_delta() {
    let surface = PointerSurface::new();
    let target = OrientationHandle::new(Orientation::new(0.0, 0.0));
    let _interactor = DragRotateInteractor::attach(&surface, DragRotateConfig::default(), target.clone());

    drag(&surface, Vec2::new(100.0, 200.0), Vec2::new(160.0, 240.0));

    let o = target.get();
    assert!(approx(o.yaw, 60.0 * K), "yaw = {}", o.yaw);
    assert!(approx(o.pitch, 40.0 * K), "pitch = {}", o.pitch);
}

#[test]
fn consecutive_moves_accumulate() {
    let mut machine = DragRotate::new(DragRotateConfig::default());
    let mut orientation = Orientation::default();

    machine.handle(&PointerEvent::down(MouseButton::Left, 0.0, 0.0), &mut orientation);
    machine.handle(&PointerEvent::moved(10.0, 5.0), &mut orientation);
    machine.handle(&PointerEvent::moved(30.0, 15.0), &mut orientation);

    assert!(approx(orientation.yaw, 30.0 * K));
    assert!(approx(orientation.pitch, 15.0 * K));
}

#[test]
fn move_without_down_changes_nothing() {
    let surface = PointerSurface::new();
    let start = Orientation::new(0.2, 0.6);
    let target = OrientationHandle::new(start);
    let _interactor = DragRotateInteractor::attach(&surface, DragRotateConfig::default(), target.clone());

    surface.dispatch(&PointerEvent::moved(500.0, 500.0));
    surface.dispatch(&PointerEvent::moved(-500.0, 20.0));

    assert_eq!(target.get(), start);
}

#[test]
fn release_returns_to_idle() {
    let surface = PointerSurface::new();
    let target = OrientationHandle::new(Orientation::default());
    let interactor = DragRotateInteractor::attach(&surface, DragRotateConfig::default(), target.clone());

    drag(&surface, Vec2::ZERO, Vec2::new(10.0, 0.0));
    let after_drag = target.get();
    surface.dispatch(&PointerEvent::moved(1000.0, 1000.0));

    assert!(!interactor.is_dragging());
    assert_eq!(target.get(), after_drag);
}

#[test]
fn secondary_button_release_also_ends_drag() {
    let mut machine = DragRotate::new(DragRotateConfig::default());
    let mut orientation = Orientation::default();

    machine.handle(&PointerEvent::down(MouseButton::Left, 0.0, 0.0), &mut orientation);
    machine.handle(&PointerEvent::up(MouseButton::Right, 0.0, 0.0), &mut orientation);

    assert!(!machine.is_dragging());
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn far_drags_pin_to_configured_bounds() {
    let config = DragRotateConfig {
        sensitivity: 0.01,
        bounds: RotationBounds::symmetric_quarter_turn(),
    };
    let quarter = std::f32::consts::FRAC_PI_4;
    let mut machine = DragRotate::new(config);
    let mut orientation = Orientation::default();

    machine.handle(&PointerEvent::down(MouseButton::Left, 0.0, 0.0), &mut orientation);
    machine.handle(&PointerEvent::moved(1.0e6, 1.0e6), &mut orientation);
    assert!(approx(orientation.yaw, quarter));
    assert!(approx(orientation.pitch, quarter));

    machine.handle(&PointerEvent::moved(-1.0e6, -1.0e6), &mut orientation);
    assert!(approx(orientation.yaw, -quarter));
    assert!(approx(orientation.pitch, -quarter));
}

#[test]
fn default_pitch_floor_is_zero() {
    let mut machine = DragRotate::new(DragRotateConfig::default());
    let mut orientation = Orientation::new(0.0, 0.0);

    machine.handle(&PointerEvent::down(MouseButton::Left, 0.0, 100.0), &mut orientation);
    machine.handle(&PointerEvent::moved(0.0, 0.0), &mut orientation);

    assert!(approx(orientation.pitch, 0.0));
}

#[test]
fn clamped_value_never_leaves_range() {
    let bounds = RotationBounds {
        yaw_min: -1.0,
        yaw_max: 1.0,
        pitch_min: 0.0,
        pitch_max: 0.5,
    };
    let mut machine = DragRotate::new(DragRotateConfig {
        sensitivity: 0.1,
        bounds,
    });
    let mut orientation = Orientation::default();
    machine.handle(&PointerEvent::down(MouseButton::Left, 0.0, 0.0), &mut orientation);

    let mut x = 0.0;
    for step in [40.0, -90.0, 300.0, -1000.0, 7.0] {
        x += step;
        machine.handle(&PointerEvent::moved(x, x), &mut orientation);
        assert!((bounds.yaw_min..=bounds.yaw_max).contains(&orientation.yaw));
        assert!((bounds.pitch_min..=bounds.pitch_max).contains(&orientation.pitch));
    }
}

// ============================================================================
// Listener ownership
// ============================================================================

#[test]
fn attach_registers_one_listener_per_kind() {
    let surface = PointerSurface::new();
    let interactor =
        DragRotateInteractor::attach(&surface, DragRotateConfig::default(), OrientationHandle::default());

    assert_eq!(surface.listener_count(), 3);
    interactor.detach();
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn dropped_interactor_no_longer_mutates_orientation() {
    let surface = PointerSurface::new();
    let target = OrientationHandle::new(Orientation::default());
    let interactor = DragRotateInteractor::attach(&surface, DragRotateConfig::default(), target.clone());
    drop(interactor);

    drag(&surface, Vec2::ZERO, Vec2::new(300.0, 300.0));

    assert_eq!(surface.listener_count(), 0);
    assert_eq!(target.get(), Orientation::default());
}

#[test]
fn unrelated_listeners_survive_detach() {
    let surface = PointerSurface::new();
    let _other = surface.add_listener(PointerEventKind::Move, |_| {});
    let interactor =
        DragRotateInteractor::attach(&surface, DragRotateConfig::default(), OrientationHandle::default());

    interactor.detach();

    assert_eq!(surface.listener_count(), 1);
}
