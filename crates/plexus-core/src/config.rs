use crate::color::Rgb;
use crate::constants::*;
use crate::particles::Viewport;

/// Live-tunable animation parameters.
///
/// `background_color` is the hue-drift baseline: the color on screen is this
/// value rotated by the loop's accumulated drift (see `BackgroundDrift`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub line_color: Rgb,
    pub background_color: Rgb,
    pub background_speed: f32,
    pub max_distance: f32,
}

impl AnimationConfig {
    pub fn defaults_for(viewport: Viewport) -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            background_speed: DEFAULT_BACKGROUND_SPEED,
            max_distance: default_max_distance(viewport),
        }
    }

    /// Apply a field edit; [`PanelEdit::Reset`] is handled by the animation loop.
    pub fn apply(&mut self, edit: PanelEdit, viewport: Viewport) {
        match edit {
            PanelEdit::LineColor(c) => self.line_color = c,
            PanelEdit::BackgroundColor(c) => self.background_color = c,
            PanelEdit::BackgroundSpeed(s) => self.background_speed = clamp_speed(s),
            PanelEdit::MaxDistance(d) => self.max_distance = clamp_max_distance(d, viewport),
            PanelEdit::Reset => *self = Self::defaults_for(viewport),
        }
    }
}

/// One user edit coming from the parameter panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelEdit {
    LineColor(Rgb),
    BackgroundColor(Rgb),
    BackgroundSpeed(f32),
    MaxDistance(f32),
    Reset,
}

/// Values the panel shows after a frame; `background_color` is the drifted color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSnapshot {
    pub line_color: Rgb,
    pub background_color: Rgb,
    pub background_speed: f32,
    pub max_distance: f32,
    pub max_distance_limit: f32,
}

#[inline]
pub fn default_max_distance(viewport: Viewport) -> f32 {
    (viewport.min_side() / MAX_DISTANCE_DIVISOR).floor().max(MAX_DISTANCE_MIN)
}

#[inline]
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return DEFAULT_BACKGROUND_SPEED;
    }
    speed.clamp(0.0, BACKGROUND_SPEED_MAX)
}

#[inline]
pub fn clamp_max_distance(distance: f32, viewport: Viewport) -> f32 {
    let limit = viewport.min_side().max(MAX_DISTANCE_MIN);
    if distance.is_nan() {
        return default_max_distance(viewport);
    }
    distance.clamp(MAX_DISTANCE_MIN, limit)
}
