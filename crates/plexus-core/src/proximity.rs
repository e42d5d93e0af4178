//! Per-frame motion step and proximity line drawing.
//!
//! The scan is a plain O(n²) pass over every unordered pair, which stays well
//! within budget at the ~100 particles the animation runs with.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::constants::{PAIR_LINE_MAX_WEIGHT, POINTER_LINE_MAX_WEIGHT};
use crate::particles::{Particle, ParticleStore};
use glam::Vec2;

/// Stroke weight of a pointer line: 2 at the pointer, 0 at `max_distance`.
#[inline]
pub fn pointer_weight(distance: f32, max_distance: f32) -> f32 {
    POINTER_LINE_MAX_WEIGHT - distance / (max_distance / 2.0)
}

/// Stroke weight of a particle-particle line: 1 when touching, 0 at `max_distance`.
#[inline]
pub fn pair_weight(distance: f32, max_distance: f32) -> f32 {
    PAIR_LINE_MAX_WEIGHT - distance / max_distance
}

/// Respawn every particle that left the extended bounds, move the others by one frame.
///
/// Returns how many particles were respawned.
pub fn advance(store: &mut ParticleStore, max_distance: f32, frame_rate: f32) -> usize {
    let viewport = store.viewport();
    let dt = 1.0 / frame_rate;
    let mut respawned = 0;
    for i in 0..store.len() {
        let p = store.particles()[i];
        if viewport.is_beyond(p.position, max_distance) {
            store.respawn_away_from_others(i, max_distance);
            respawned += 1;
        } else {
            store.particles_mut()[i].position += p.direction * dt;
        }
    }
    respawned
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub pointer: usize,
    pub pairs: usize,
}

impl LineCounts {
    pub fn total(&self) -> usize {
        self.pointer + self.pairs
    }
}

/// Draw pointer lines and pair lines for the current particle positions.
///
/// Distances equal to `max_distance` are not connected. Lines for particle `i`
/// are issued as: its pointer line, then its pairs with every `j > i`.
pub fn render<C: Canvas + ?Sized>(
    canvas: &mut C,
    particles: &[Particle],
    pointer: Option<Vec2>,
    line_color: Rgb,
    max_distance: f32,
) -> LineCounts {
    let mut counts = LineCounts::default();
    canvas.stroke(line_color);
    for (i, a) in particles.iter().enumerate() {
        if let Some(ptr) = pointer {
            let d = a.position.distance(ptr);
            if d < max_distance {
                canvas.stroke_weight(pointer_weight(d, max_distance));
                canvas.line(ptr, a.position);
                counts.pointer += 1;
            }
        }
        for b in &particles[i + 1..] {
            let d = a.position.distance(b.position);
            if d < max_distance {
                canvas.stroke_weight(pair_weight(d, max_distance));
                canvas.line(a.position, b.position);
                counts.pairs += 1;
            }
        }
    }
    counts
}
