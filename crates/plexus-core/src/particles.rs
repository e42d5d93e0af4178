use crate::constants::{PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN, RESPAWN_ATTEMPTS};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Velocity in units per second; its length is fixed at spawn.
    pub direction: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// True when `p` lies outside the viewport grown by `margin` on every side.
    #[inline]
    pub fn is_beyond(&self, p: Vec2, margin: f32) -> bool {
        p.x > self.width + margin || p.x < -margin || p.y > self.height + margin || p.y < -margin
    }
}

/// Owns the particle list and every placement decision made about it.
pub struct ParticleStore {
    particles: Vec<Particle>,
    viewport: Viewport,
    rng: StdRng,
}

impl ParticleStore {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            viewport,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Append a particle at `at`, or at a uniform position in the viewport.
    pub fn spawn(&mut self, at: Option<Vec2>) -> Particle {
        let position = at.unwrap_or_else(|| self.random_position());
        let angle = self.rng.gen::<f32>() * TAU;
        let speed =
            PARTICLE_SPEED_MIN + self.rng.gen::<f32>() * (PARTICLE_SPEED_MAX - PARTICLE_SPEED_MIN);
        let particle = Particle {
            position,
            direction: Vec2::from_angle(angle) * speed,
        };
        self.particles.push(particle);
        particle
    }

    pub fn reset(&mut self, count: usize) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.spawn(None);
        }
    }

    /// Move particle `index` somewhere not already connected to another particle.
    ///
    /// Tries at most [`RESPAWN_ATTEMPTS`] uniform candidates and keeps the last one
    /// if none is clear. The direction is left untouched. Returns the number of
    /// attempts used, or 0 if `index` is out of range.
    pub fn respawn_away_from_others(&mut self, index: usize, max_distance: f32) -> u32 {
        if index >= self.particles.len() {
            return 0;
        }
        let mut candidate = self.random_position();
        let mut attempts = 1;
        while attempts < RESPAWN_ATTEMPTS
            && self.is_near_any(candidate, max_distance, Some(index))
        {
            candidate = self.random_position();
            attempts += 1;
        }
        self.particles[index].position = candidate;
        attempts
    }

    /// True iff some particle (other than `excluding`) is strictly closer than `max_distance`.
    pub fn is_near_any(&self, point: Vec2, max_distance: f32, excluding: Option<usize>) -> bool {
        self.particles
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != excluding)
            .any(|(_, p)| p.position.distance(point) < max_distance)
    }

    /// Drag support: teleport a uniformly chosen particle to `point`.
    pub fn relocate_random(&mut self, point: Vec2) -> Option<usize> {
        if self.particles.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.particles.len());
        self.particles[index].position = point;
        Some(index)
    }

    fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen::<f32>() * self.viewport.width,
            self.rng.gen::<f32>() * self.viewport.height,
        )
    }
}
