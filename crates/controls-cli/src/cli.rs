use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    ", ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "controls-cli", version = VERSION)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which speed preset a playback rate resolves to
    Rate {
        /// Playback rate, e.g. 0.75
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Check a start/end timestamp (m:ss, or empty for no bound)
    Check {
        timestamp: String,
    },

    /// List the speed menu entries
    Menu,

    /// Fill in the controls and press play
    Play {
        /// TOML file with initial start/end/loop/rate values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Start time (m:ss)
        #[arg(long)]
        start: Option<String>,

        /// End time (m:ss)
        #[arg(long)]
        end: Option<String>,

        /// Loop the selected range (`--loop=false` turns off a configured loop)
        #[arg(long = "loop", num_args = 0..=1, default_missing_value = "true")]
        looping: Option<bool>,

        /// Speed menu entry (e.g. 1.0x) or a raw rate
        #[arg(long)]
        rate: Option<String>,
    },
}
