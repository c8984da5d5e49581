//! Playback parameter handling for a video range player: matching a numeric
//! rate to the speed presets, validating `m:ss` timestamps, and the form model
//! that forwards user edits to caller-supplied callbacks.

pub mod config;
pub mod controls;
pub mod presets;
pub mod timestamp;
pub mod tolerance;

pub use playback_controls_types::{ControlsState, ControlsStatus, PresetRate, RateMenuItem};
