// Host-side tests for the motion step and proximity line drawing.

mod common;

use common::{Call, RecordingCanvas};
use glam::Vec2;
use plexus_core::proximity::{advance, render};
use plexus_core::{pair_weight, pointer_weight, Particle, ParticleStore, Rgb, Viewport};

const WHITE: Rgb = Rgb::new(255, 255, 255);

fn at(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        direction: Vec2::new(10.0, 0.0),
    }
}

#[test]
fn two_close_particles_draw_one_weighted_line() {
    let particles = [at(100.0, 100.0), at(130.0, 100.0)];
    let mut canvas = RecordingCanvas::default();
    let counts = render(&mut canvas, &particles, None, WHITE, 50.0);

    assert_eq!(counts.pairs, 1);
    assert_eq!(counts.pointer, 0);
    assert_eq!(canvas.lines(), vec![(Vec2::new(100.0, 100.0), Vec2::new(130.0, 100.0))]);
    let weights = canvas.weights();
    assert_eq!(weights.len(), 1);
    assert!((weights[0] - 0.4).abs() < 1e-6, "weight {}", weights[0]);
    assert_eq!(canvas.calls[0], Call::Stroke(WHITE));
}

#[test]
fn exact_threshold_distance_is_not_connected() {
    let particles = [at(0.0, 0.0), at(50.0, 0.0)];
    let mut canvas = RecordingCanvas::default();
    let counts = render(&mut canvas, &particles, Some(Vec2::new(0.0, 50.0)), WHITE, 50.0);
    assert_eq!(counts.pairs, 0);
    // (50, 0) is sqrt(5000) away from the pointer; (0, 0) sits exactly on the threshold.
    assert_eq!(counts.pointer, 0);
    assert!(canvas.lines().is_empty());
}

#[test]
fn every_close_pair_is_drawn_once() {
    // Three points on a line, 20 apart: pairs (0,1), (1,2) close, (0,2) at 40 also close.
    let particles = [at(0.0, 0.0), at(20.0, 0.0), at(40.0, 0.0), at(500.0, 500.0)];
    let mut canvas = RecordingCanvas::default();
    let counts = render(&mut canvas, &particles, None, WHITE, 45.0);
    assert_eq!(counts.pairs, 3);
    let lines = canvas.lines();
    assert_eq!(lines.len(), 3);
    for (a, b) in &lines {
        let reversed = lines.iter().filter(|(x, y)| x == b && y == a).count();
        assert_eq!(reversed, 0, "pair drawn twice");
    }
}

#[test]
fn pointer_lines_use_pointer_weight() {
    let pointer = Vec2::new(200.0, 200.0);
    let (a, b) = (Vec2::new(210.0, 200.0), Vec2::new(200.0, 240.0));
    let particles = [at(210.0, 200.0), at(200.0, 240.0), at(400.0, 400.0)];
    let mut canvas = RecordingCanvas::default();
    let counts = render(&mut canvas, &particles, Some(pointer), WHITE, 50.0);
    assert_eq!(counts.pointer, 2);
    assert_eq!(counts.pairs, 1);
    assert_eq!(counts.total(), 3);

    // Order: pointer line for 0, pair (0,1), pointer line for 1.
    assert_eq!(
        canvas.calls,
        vec![
            Call::Stroke(WHITE),
            Call::StrokeWeight(pointer_weight(10.0, 50.0)),
            Call::Line(pointer, Vec2::new(210.0, 200.0)),
            Call::StrokeWeight(pair_weight(a.distance(b), 50.0)),
            Call::Line(Vec2::new(210.0, 200.0), Vec2::new(200.0, 240.0)),
            Call::StrokeWeight(pointer_weight(40.0, 50.0)),
            Call::Line(pointer, Vec2::new(200.0, 240.0)),
        ]
    );
}

#[test]
fn weights_fall_linearly_to_zero_at_threshold() {
    assert!((pointer_weight(0.0, 80.0) - 2.0).abs() < 1e-6);
    assert!((pointer_weight(40.0, 80.0) - 1.0).abs() < 1e-6);
    assert!(pointer_weight(80.0, 80.0).abs() < 1e-6);
    assert!((pair_weight(0.0, 80.0) - 1.0).abs() < 1e-6);
    assert!((pair_weight(20.0, 80.0) - 0.75).abs() < 1e-6);
    assert!(pair_weight(80.0, 80.0).abs() < 1e-6);
}

#[test]
fn advance_moves_by_direction_over_frame_rate() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut store = ParticleStore::new(viewport, 11);
    store.spawn(Some(Vec2::new(100.0, 100.0)));
    let dir = store.particles()[0].direction;
    let respawned = advance(&mut store, 50.0, 20.0);
    assert_eq!(respawned, 0);
    let expected = Vec2::new(100.0, 100.0) + dir / 20.0;
    assert!(store.particles()[0].position.distance(expected) < 1e-4);
}

#[test]
fn advance_respawns_particles_past_the_margin() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut store = ParticleStore::new(viewport, 12);
    store.spawn(Some(Vec2::new(860.0, 300.0)));
    store.spawn(Some(Vec2::new(840.0, 300.0)));
    let before = store.particles().to_vec();

    let respawned = advance(&mut store, 50.0, 60.0);

    assert_eq!(respawned, 1);
    let first = store.particles()[0];
    assert!(viewport.contains(first.position));
    assert_eq!(first.direction, before[0].direction);
    // Inside the margin: moved, not respawned.
    let second = store.particles()[1];
    let expected = before[1].position + before[1].direction / 60.0;
    assert!(second.position.distance(expected) < 1e-4);
}
