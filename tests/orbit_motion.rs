use orbit_ship::{project, OrbitController, Viewport, Zone};
use std::f64::consts::PI;

#[test]
fn right_press_then_projection() {
    let mut controller = OrbitController::new();
    let viewport = Viewport::new(1000.0, 1000.0);

    assert_eq!(controller.on_pointer_move(600.0, viewport.width), Zone::Right);
    assert!((controller.angle() + 0.0055).abs() < 1e-12);

    let projection = controller.project(viewport);
    let radius = 445.0;
    assert!((projection.x - (500.0 + radius * (-0.0055f64).cos())).abs() < 1e-9);
    assert!((projection.y - (500.0 + radius * (-0.0055f64).sin())).abs() < 1e-9);
    assert_eq!(projection, project(controller.angle(), viewport));
}

#[test]
fn hundred_right_moves_accumulate_linearly() {
    let mut controller = OrbitController::new();
    for _ in 0..100 {
        controller.on_pointer_move(800.0, 1000.0);
    }
    assert!((controller.angle() + 0.55).abs() < 1e-9);
}

#[test]
fn zones_over_a_sweep() {
    let width = 200.0;
    for step in 0..=200 {
        let x = step as f64;
        let expected = if x > 110.0 {
            Zone::Right
        } else if x < 90.0 {
            Zone::Left
        } else {
            Zone::Dead
        };
        assert_eq!(Zone::classify(x, width), expected, "x = {x}");
    }
}

#[test]
fn mixed_session_returns_home() {
    let mut controller = OrbitController::new();
    let width = 320.0;
    for _ in 0..40 {
        controller.on_pointer_move(10.0, width);
    }
    controller.on_pointer_release();
    for _ in 0..15 {
        controller.on_pointer_move(160.0, width);
    }
    for _ in 0..40 {
        controller.on_pointer_move(310.0, width);
    }
    controller.on_pointer_release();
    assert!(controller.angle().abs() < 1e-12);
}

#[test]
fn full_turn_projects_to_same_point() {
    let viewport = Viewport::new(120.0, 80.0);
    let start = project(1.25, viewport);
    let turned = project(1.25 + 2.0 * PI, viewport);
    assert!((start.x - turned.x).abs() < 1e-9);
    assert!((start.y - turned.y).abs() < 1e-9);
}
