// src/constants.rs

use egui::Color32;

// Integer travel range of the switch value. Only the two extremes are stable
// states; everything in between exists transiently while animating.
pub const VALUE_MIN: i32 = 0;
pub const VALUE_MAX: i32 = 99;

pub const ANIMATION_DURATION_SECS: f64 = 1.0; // Full toggle transition (1000 ms)

// Artwork geometry, in points.
pub const KNOB_WIDTH: f32 = 32.0;
pub const KNOB_MARGIN: f32 = 2.0; // Gap between the knob and the groove edge
pub const GROOVE_WIDTH: f32 = 70.0;
pub const GROOVE_HEIGHT: f32 = 35.0;

// Halo painted behind the switch while it is on.
pub const GLOW_BLUR: f32 = 99.0;
pub const GLOW_COLOR: Color32 = Color32::from_rgb(99, 255, 255);

// Demo window dimensions.
pub const WINDOW_WIDTH: f32 = 350.0;
pub const WINDOW_HEIGHT: f32 = 250.0;
