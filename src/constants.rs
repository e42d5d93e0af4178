// DOM hooks and widget tuning for the web frontend.

// Page elements
pub const HOME_ID: &str = "home"; // canvas parent
pub const GUI_CONTAINER_ID: &str = "gui-container";
pub const NAME_CONTAINER_ID: &str = "name-container";
pub const TOGGLE_ANIMATION_BTN_ID: &str = "toggle-animation-btn";
pub const TWEAK_ANIMATION_BTN_ID: &str = "tweak-animation-btn";
pub const VISIBLE_CLASS: &str = "visible";

// Toggle button captions
pub const LABEL_ANIMATION_ON: &str = "Animation On";
pub const LABEL_ANIMATION_OFF: &str = "Animation Off";

// Parameter panel
pub const PANEL_CLASS: &str = "plexus-panel";
pub const SPEED_SLIDER_STEP: f32 = 0.001;
pub const DISTANCE_SLIDER_STEP: f32 = 1.0;

// Canvas 2D ignores non-positive line widths and keeps the previous one
pub const MIN_LINE_WIDTH: f64 = 0.01;
