//! Form model for the playback controls.
//!
//! Holds the field values and forwards every user edit to the callbacks the
//! embedding UI supplies. Timestamps are only validated when play is pressed.

use playback_controls_types::{ControlsState, ControlsStatus, RateMenuItem};

use crate::presets::{match_preset, nearest_preset_label, speed_button_label};
use crate::timestamp::is_valid_timestamp;

/// Reason a play request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid start time in format m:ss")]
    InvalidStart,
    #[error("Please enter a valid end time in format m:ss")]
    InvalidEnd,
}

/// Callbacks invoked as the user interacts with the controls.
pub struct ControlCallbacks {
    pub on_start_input_change: Box<dyn FnMut(&str) + Send>,
    pub on_end_input_change: Box<dyn FnMut(&str) + Send>,
    pub on_loop_input_change: Box<dyn FnMut(bool) + Send>,
    pub on_rate_input_change: Box<dyn FnMut(f64) + Send>,
    pub on_play: Box<dyn FnMut() + Send>,
}

impl ControlCallbacks {
    /// Callbacks that ignore every event.
    pub fn noop() -> Self {
        Self {
            on_start_input_change: Box::new(|_: &str| {}),
            on_end_input_change: Box::new(|_: &str| {}),
            on_loop_input_change: Box::new(|_| {}),
            on_rate_input_change: Box::new(|_| {}),
            on_play: Box::new(|| {}),
        }
    }
}

impl std::fmt::Debug for ControlCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlCallbacks").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct PlaybackControls {
    state: ControlsState,
    callbacks: ControlCallbacks,
}

impl PlaybackControls {
    pub fn new(state: ControlsState, callbacks: ControlCallbacks) -> Self {
        Self { state, callbacks }
    }

    pub fn state(&self) -> &ControlsState {
        &self.state
    }

    pub fn handle_start_input_change(&mut self, value: &str) {
        self.state.start = value.to_string();
        (self.callbacks.on_start_input_change)(value);
    }

    pub fn handle_end_input_change(&mut self, value: &str) {
        self.state.end = value.to_string();
        (self.callbacks.on_end_input_change)(value);
    }

    pub fn handle_loop_change(&mut self, checked: bool) {
        self.state.looping = checked;
        (self.callbacks.on_loop_input_change)(checked);
    }

    /// Apply a speed menu selection.
    pub fn select_rate(&mut self, item: &RateMenuItem) {
        self.select_rate_value(item.value);
    }

    pub fn select_rate_value(&mut self, rate: f64) {
        self.state.rate = rate;
        (self.callbacks.on_rate_input_change)(rate);
    }

    /// Validate both timestamps and fire `on_play`.
    ///
    /// The start field is checked before the end field; nothing is forwarded
    /// when either is invalid.
    pub fn play(&mut self) -> Result<(), ValidationError> {
        if !is_valid_timestamp(&self.state.start) {
            tracing::warn!(start = %self.state.start, "rejected play: invalid start");
            return Err(ValidationError::InvalidStart);
        }
        if !is_valid_timestamp(&self.state.end) {
            tracing::warn!(end = %self.state.end, "rejected play: invalid end");
            return Err(ValidationError::InvalidEnd);
        }
        tracing::debug!(
            start = %self.state.start,
            end = %self.state.end,
            looping = self.state.looping,
            rate = self.state.rate,
            "play"
        );
        (self.callbacks.on_play)();
        Ok(())
    }

    /// Text of the speed menu button.
    pub fn speed_label(&self) -> String {
        speed_button_label(self.state.rate)
    }

    pub fn status(&self) -> ControlsStatus {
        ControlsStatus {
            start: self.state.start.clone(),
            end: self.state.end.clone(),
            looping: self.state.looping,
            rate: self.state.rate,
            speed_label: nearest_preset_label(self.state.rate).label,
            rate_matched: match_preset(self.state.rate).is_some(),
        }
    }
}
