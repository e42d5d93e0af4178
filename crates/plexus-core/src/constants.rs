use crate::color::Rgb;

// Shared animation tuning constants used by the engine and the web frontend.

// Population
pub const INITIAL_PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPEED_MIN: f32 = 10.0; // units per second
pub const PARTICLE_SPEED_MAX: f32 = 30.0; // exclusive upper bound
pub const RESPAWN_ATTEMPTS: u32 = 10; // bounded best-effort placement

// Frame-rate governor
pub const TARGET_FRAME_RATE: f32 = 60.0;
pub const LOW_FRAME_RATE: f32 = 15.0; // samples at or below this count as drops
pub const DEGRADE_AFTER_DROPS: u32 = 10; // first stage: lower pixel density
pub const PAUSE_AFTER_DROPS: u32 = 20; // second stage: stop the animation
pub const DEGRADED_PIXEL_DENSITY: f32 = 0.75;

// Screens above this pixel count start at the degraded density (roughly qHD and up)
pub const HIGH_RES_PIXEL_COUNT: f32 = 3_500_000.0;

// Stroke weights at zero distance
pub const POINTER_LINE_MAX_WEIGHT: f32 = 2.0;
pub const PAIR_LINE_MAX_WEIGHT: f32 = 1.0;

// Panel defaults and ranges
pub const DEFAULT_LINE_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const DEFAULT_BACKGROUND_COLOR: Rgb = Rgb::new(11, 70, 80);
pub const DEFAULT_BACKGROUND_SPEED: f32 = 0.06; // hue turns per second
pub const BACKGROUND_SPEED_MAX: f32 = 0.1;
pub const MAX_DISTANCE_MIN: f32 = 1.0;
pub const MAX_DISTANCE_DIVISOR: f32 = 4.0; // default = floor(min side / 4)
