// src/lib.rs

pub mod animation;
pub mod constants;
pub mod skin;
pub mod switch;

pub use skin::{SkinError, SwitchStyle};
pub use switch::{SwitchResponse, ToggleSwitch};
