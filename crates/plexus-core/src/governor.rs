//! Frame-rate safeguard.
//!
//! Sustained low frame rates are treated as resource pressure. The governor first
//! lowers the pixel density, and if drops keep coming it pauses the animation.
//! Only an explicit [`PerformanceGovernor::resume`] leaves the paused tier.

use crate::constants::{DEGRADE_AFTER_DROPS, LOW_FRAME_RATE, PAUSE_AFTER_DROPS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tier {
    #[default]
    Normal,
    DegradedDensity,
    Paused,
}

/// What the caller should do with the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GovernorAction {
    /// Full update and draw.
    Proceed,
    /// Skip this frame, nothing else to do.
    Hold,
    /// Skip this frame and lower the pixel density.
    ReduceDensity,
    /// Skip this frame and stop the animation.
    Pause,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerformanceState {
    pub consecutive_fps_drops: u32,
    /// Kept alongside the drop counter but never consulted.
    pub consecutive_fps_above: u32,
}

#[derive(Clone, Debug, Default)]
pub struct PerformanceGovernor {
    state: PerformanceState,
    tier: Tier,
}

impl PerformanceGovernor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn state(&self) -> PerformanceState {
        self.state
    }

    /// Feed one frame-rate sample.
    ///
    /// Good frames do not clear the drop counter; it is only cleared when the
    /// governor pauses.
    pub fn observe(&mut self, frame_rate: f32) -> GovernorAction {
        if frame_rate > LOW_FRAME_RATE {
            self.tier = Tier::Normal;
            return GovernorAction::Proceed;
        }

        self.state.consecutive_fps_drops += 1;
        let drops = self.state.consecutive_fps_drops;
        if drops > PAUSE_AFTER_DROPS {
            log::warn!("[governor] {drops} low frames (last {frame_rate:.1} fps); pausing");
            self.tier = Tier::Paused;
            self.state.consecutive_fps_drops = 0;
            GovernorAction::Pause
        } else if drops > DEGRADE_AFTER_DROPS {
            if self.tier == Tier::DegradedDensity {
                return GovernorAction::Hold;
            }
            log::info!(
                "[governor] {drops} low frames (last {frame_rate:.1} fps); reducing density"
            );
            self.tier = Tier::DegradedDensity;
            GovernorAction::ReduceDensity
        } else {
            GovernorAction::Hold
        }
    }

    /// Leave the paused tier after the user turned the animation back on.
    pub fn resume(&mut self) {
        if self.tier == Tier::Paused {
            log::info!("[governor] resumed");
        }
        self.tier = Tier::Normal;
    }
}
