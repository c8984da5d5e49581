//! `controls-cli`: drive the playback controls from a terminal.
//!
//! Stands in for the UI layer: each subcommand feeds user input through the
//! same handlers a form would call and reports what the form would show.
//!
//! ## Commands
//! - `rate`: resolve a rate to its speed preset.
//! - `check`: validate an `m:ss` timestamp.
//! - `menu`: list the speed menu.
//! - `play`: fill in the controls (config file, then flags) and press play.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use playback_controls::{ControlsState, ControlsStatus};
use playback_controls::config::ControlsConfig;
use playback_controls::controls::{ControlCallbacks, PlaybackControls};
use playback_controls::presets::{RATE_MENU, match_preset, menu_item, nearest_preset_label};
use playback_controls::timestamp::{TIMESTAMP_FORMAT_HINT, is_valid_timestamp};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,controls_cli=info")
        }))
        .init();

    match args.cmd {
        cli::Command::Rate { value } => {
            let preset = nearest_preset_label(value);
            if match_preset(value).is_some() {
                println!("{}", preset.label);
            } else {
                println!("{} (default, no preset matches {value})", preset.label);
            }
        }
        cli::Command::Check { timestamp } => {
            if is_valid_timestamp(&timestamp) {
                println!("valid");
            } else {
                println!("invalid: expected {TIMESTAMP_FORMAT_HINT}");
                std::process::exit(1);
            }
        }
        cli::Command::Menu => {
            for item in &RATE_MENU {
                println!("{:>6}  {}", item.label, item.value);
            }
        }
        cli::Command::Play {
            config,
            start,
            end,
            looping,
            rate,
        } => {
            let initial = match config.as_deref() {
                Some(path) => ControlsConfig::load(path)?.into_state(),
                None => ControlsState::default(),
            };
            let overrides = PlayOverrides {
                start,
                end,
                looping,
                rate: rate.as_deref().map(parse_rate).transpose()?,
            };

            let status = run_play(initial, overrides)?;
            let status =
                serde_json::to_string_pretty(&status).context("serialize controls status")?;
            println!("{status}");
        }
    }

    Ok(())
}

/// Values given on the command line; each one replaces the configured value.
#[derive(Debug, Default)]
struct PlayOverrides {
    start: Option<String>,
    end: Option<String>,
    looping: Option<bool>,
    rate: Option<f64>,
}

/// Apply `overrides` on top of `initial` through the form handlers, then
/// press play.
fn run_play(initial: ControlsState, overrides: PlayOverrides) -> Result<ControlsStatus> {
    let mut controls = PlaybackControls::new(initial, logging_callbacks());
    if let Some(start) = overrides.start {
        controls.handle_start_input_change(&start);
    }
    if let Some(end) = overrides.end {
        controls.handle_end_input_change(&end);
    }
    if let Some(looping) = overrides.looping {
        controls.handle_loop_change(looping);
    }
    if let Some(rate) = overrides.rate {
        controls.select_rate_value(rate);
    }

    controls.play()?;
    Ok(controls.status())
}

fn logging_callbacks() -> ControlCallbacks {
    ControlCallbacks {
        on_start_input_change: Box::new(|value: &str| tracing::info!(start = value, "start changed")),
        on_end_input_change: Box::new(|value: &str| tracing::info!(end = value, "end changed")),
        on_loop_input_change: Box::new(|checked| tracing::info!(looping = checked, "loop changed")),
        on_rate_input_change: Box::new(|rate| {
            tracing::info!(rate, label = nearest_preset_label(rate).label, "rate changed")
        }),
        on_play: Box::new(|| tracing::info!("play")),
    }
}

/// Accept a speed menu label (`1.0x`) or a bare number.
fn parse_rate(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if let Some(item) = menu_item(trimmed) {
        return Ok(item.value);
    }
    trimmed
        .parse::<f64>()
        .with_context(|| format!("parse rate {raw:?}"))
}
