//! Configuration loading and parsing.
//!
//! Initial values for the controls, read from TOML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use playback_controls_types::ControlsState;

/// Initial control values loaded from TOML. Missing keys fall back to
/// [`ControlsState::default`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ControlsConfig {
    /// Initial start timestamp (`m:ss`).
    pub start: Option<String>,
    /// Initial end timestamp (`m:ss`).
    pub end: Option<String>,
    /// Initial loop checkbox state.
    #[serde(rename = "loop")]
    pub looping: Option<bool>,
    /// Initial playback rate.
    pub rate: Option<f64>,
}

impl ControlsConfig {
    /// Load configuration from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            std::fs::read_to_string(path).with_context(|| format!("read config {:?}", path))?;
        Self::parse(&raw).with_context(|| format!("parse config {:?}", path))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let cfg = toml::from_str::<ControlsConfig>(raw)?;
        if let Some(rate) = cfg.rate
            && (!rate.is_finite() || rate <= 0.0)
        {
            return Err(anyhow::anyhow!("rate must be a positive number, got {rate}"));
        }
        Ok(cfg)
    }

    /// Resolve into a full control state.
    pub fn into_state(self) -> ControlsState {
        let defaults = ControlsState::default();
        ControlsState {
            start: self.start.unwrap_or(defaults.start),
            end: self.end.unwrap_or(defaults.end),
            looping: self.looping.unwrap_or(defaults.looping),
            rate: self.rate.unwrap_or(defaults.rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg = ControlsConfig::parse("").unwrap();
        assert_eq!(cfg, ControlsConfig::default());
        assert_eq!(cfg.into_state(), ControlsState::default());
    }

    #[test]
    fn full_config_is_applied() {
        let cfg = ControlsConfig::parse(
            r#"
start = "0:15"
end = "1:45"
loop = true
rate = 0.75
"#,
        )
        .unwrap();
        let state = cfg.into_state();
        assert_eq!(state.start, "0:15");
        assert_eq!(state.end, "1:45");
        assert!(state.looping);
        assert_eq!(state.rate, 0.75);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let state = ControlsConfig::parse("loop = true").unwrap().into_state();
        assert!(state.looping);
        assert_eq!(state.rate, 1.0);
        assert!(state.start.is_empty());
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        assert!(ControlsConfig::parse("rate = 0.0").is_err());
        assert!(ControlsConfig::parse("rate = -1.0").is_err());
        assert!(ControlsConfig::parse("rate = nan").is_err());
        assert!(ControlsConfig::parse("rate = inf").is_err());
        assert_eq!(ControlsConfig::parse("rate = 2.0").unwrap().rate, Some(2.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ControlsConfig::parse("speed = 2.0").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ControlsConfig::load(Path::new("/nonexistent/controls.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read config"));
    }
}
