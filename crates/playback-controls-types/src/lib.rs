use serde::{Deserialize, Serialize};

/// A selectable playback speed: the numeric rate and the label shown for it.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct PresetRate {
    /// Playback rate multiplier (1.0 is normal speed).
    pub value: f64,
    /// Short display label, for example `.5x`.
    pub label: &'static str,
}

/// One entry of the speed menu offered to the user.
///
/// Menu labels are not always identical to preset labels (`1.0x` in the menu
/// resolves to the `1x` preset once selected).
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct RateMenuItem {
    /// Text of the menu entry.
    pub label: &'static str,
    /// Rate forwarded when the entry is picked.
    pub value: f64,
}

/// Current values of the playback form fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlsState {
    /// Start timestamp as typed (`m:ss` or empty).
    pub start: String,
    /// End timestamp as typed (`m:ss` or empty).
    pub end: String,
    /// Whether the selected range should loop.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Current playback rate.
    pub rate: f64,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            start: String::new(),
            end: String::new(),
            looping: false,
            rate: 1.0,
        }
    }
}

/// Snapshot of the controls for display or JSON output.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ControlsStatus {
    /// Start timestamp as typed.
    pub start: String,
    /// End timestamp as typed.
    pub end: String,
    /// Loop checkbox state.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Raw playback rate.
    pub rate: f64,
    /// Label of the preset the rate resolves to.
    pub speed_label: &'static str,
    /// `false` when the rate matched no preset and the default was shown.
    pub rate_matched: bool,
}
