//! Per-frame orchestration of the particle animation.
//!
//! A tick runs in a fixed order: queued panel edits, the governor, hue drift
//! and background, particle motion, proximity lines, then the panel snapshot.
//! Lines are always drawn from post-respawn positions.

use crate::canvas::Canvas;
use crate::color::{shift_hue, Rgb};
use crate::config::{clamp_max_distance, AnimationConfig, PanelEdit, PanelSnapshot};
use crate::constants::*;
use crate::governor::{GovernorAction, PerformanceGovernor};
use crate::particles::{Particle, ParticleStore, Viewport};
use crate::proximity::{self, LineCounts};
use glam::Vec2;
use std::time::Duration;

/// Accumulated hue rotation applied on top of the configured background color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackgroundDrift {
    offset: f64,
}

impl BackgroundDrift {
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn advance(&mut self, delta: f64) {
        // One full turn is the identity, so keep the offset small.
        self.offset = (self.offset + delta).rem_euclid(1.0);
    }

    /// Start drifting again from whatever baseline is now configured.
    pub fn reseed(&mut self) {
        self.offset = 0.0;
    }

    pub fn current(&self, baseline: Rgb) -> Rgb {
        shift_hue(baseline, self.offset)
    }
}

/// Frames-per-second of the most recent frame, measured from its delta.
#[derive(Clone, Copy, Debug)]
pub struct FrameRateMeter {
    rate: f32,
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self {
            rate: TARGET_FRAME_RATE,
        }
    }
}

impl FrameRateMeter {
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// A zero delta carries no timing information and keeps the previous rate.
    pub fn sample(&mut self, dt: Duration) -> f32 {
        let secs = dt.as_secs_f32();
        if secs > 0.0 {
            self.rate = 1.0 / secs;
        }
        self.rate
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// The animation is switched off; nothing was drawn.
    Idle,
    /// The governor skipped this frame and took the given action.
    Throttled(GovernorAction),
    Rendered {
        lines: LineCounts,
        respawned: usize,
        snapshot: PanelSnapshot,
    },
}

pub struct AnimationLoop {
    config: AnimationConfig,
    store: ParticleStore,
    governor: PerformanceGovernor,
    drift: BackgroundDrift,
    meter: FrameRateMeter,
    edits: Vec<PanelEdit>,
    particle_count: usize,
    running: bool,
}

impl AnimationLoop {
    pub fn new(viewport: Viewport, particle_count: usize, seed: u64) -> Self {
        let mut store = ParticleStore::new(viewport, seed);
        store.reset(particle_count);
        Self {
            config: AnimationConfig::defaults_for(viewport),
            store,
            governor: PerformanceGovernor::new(),
            drift: BackgroundDrift::default(),
            meter: FrameRateMeter::default(),
            edits: Vec::new(),
            particle_count,
            running: true,
        }
    }

    /// One-time canvas preparation; very large screens start at reduced density.
    pub fn setup<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let viewport = self.store.viewport();
        canvas.resize(viewport);
        canvas.frame_rate(TARGET_FRAME_RATE);
        if viewport.area() > HIGH_RES_PIXEL_COUNT {
            log::info!(
                "[loop] {}x{} viewport; starting at density {}",
                viewport.width,
                viewport.height,
                DEGRADED_PIXEL_DENSITY
            );
            canvas.pixel_density(DEGRADED_PIXEL_DENSITY);
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    pub fn governor(&self) -> &PerformanceGovernor {
        &self.governor
    }

    pub fn drift(&self) -> BackgroundDrift {
        self.drift
    }

    pub fn viewport(&self) -> Viewport {
        self.store.viewport()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_rate(&self) -> f32 {
        self.meter.rate()
    }

    pub fn current_background(&self) -> Rgb {
        self.drift.current(self.config.background_color)
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            line_color: self.config.line_color,
            background_color: self.current_background(),
            background_speed: self.config.background_speed,
            max_distance: self.config.max_distance,
            max_distance_limit: self.viewport().min_side(),
        }
    }

    /// Queue a panel edit; it takes effect at the start of the next tick.
    pub fn submit(&mut self, edit: PanelEdit) {
        self.edits.push(edit);
    }

    pub fn apply_edit(&mut self, edit: PanelEdit) {
        match edit {
            PanelEdit::Reset => self.reset(),
            PanelEdit::BackgroundColor(_) => {
                self.config.apply(edit, self.viewport());
                self.drift.reseed();
            }
            _ => self.config.apply(edit, self.viewport()),
        }
    }

    /// Fresh particles and default parameters. The hue keeps drifting from the default color.
    pub fn reset(&mut self) {
        self.store.reset(self.particle_count);
        self.config = AnimationConfig::defaults_for(self.viewport());
        self.drift.reseed();
        log::info!(
            "[loop] reset: {} particles, max distance {}",
            self.particle_count,
            self.config.max_distance
        );
    }

    /// Flip the run flag; returns the new state.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        if self.running {
            self.governor.resume();
        }
        log::info!("[loop] animation {}", if self.running { "on" } else { "off" });
        self.running
    }

    pub fn resize<C: Canvas + ?Sized>(&mut self, viewport: Viewport, canvas: &mut C) {
        self.store.resize(viewport);
        canvas.resize(viewport);
        self.config.max_distance = clamp_max_distance(self.config.max_distance, viewport);
        log::debug!("[loop] resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn drag_to(&mut self, point: Vec2) {
        self.store.relocate_random(point);
    }

    /// Advance one frame that took `dt`; motion, hue and the governor all see `1 / dt`.
    pub fn tick<C: Canvas + ?Sized>(
        &mut self,
        dt: Duration,
        pointer: Option<Vec2>,
        canvas: &mut C,
    ) -> TickOutcome {
        let rate = self.meter.sample(dt);
        self.tick_at_rate(rate, pointer, canvas)
    }

    pub fn tick_at_rate<C: Canvas + ?Sized>(
        &mut self,
        frame_rate: f32,
        pointer: Option<Vec2>,
        canvas: &mut C,
    ) -> TickOutcome {
        for edit in std::mem::take(&mut self.edits) {
            self.apply_edit(edit);
        }

        if !self.running {
            return TickOutcome::Idle;
        }

        match self.governor.observe(frame_rate) {
            GovernorAction::Proceed => {}
            GovernorAction::ReduceDensity => {
                canvas.pixel_density(DEGRADED_PIXEL_DENSITY);
                return TickOutcome::Throttled(GovernorAction::ReduceDensity);
            }
            GovernorAction::Pause => {
                self.running = false;
                return TickOutcome::Throttled(GovernorAction::Pause);
            }
            GovernorAction::Hold => return TickOutcome::Throttled(GovernorAction::Hold),
        }

        self.drift
            .advance(self.config.background_speed as f64 / frame_rate as f64);
        canvas.background(self.current_background());

        let max_distance = self.config.max_distance;
        let respawned = proximity::advance(&mut self.store, max_distance, frame_rate);
        let lines = proximity::render(
            canvas,
            self.store.particles(),
            pointer,
            self.config.line_color,
            max_distance,
        );

        TickOutcome::Rendered {
            lines,
            respawned,
            snapshot: self.snapshot(),
        }
    }
}
