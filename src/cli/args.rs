//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Options
//!
//! Long options come first, followed by the action flags:
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug output
//! - `--quiet`: Minimal output
//! - `--dry-run`: Report what would happen without doing it
//!
//! Action flags (`-da`, `-ea`, `-dw:ssid`, `-cw:ssid`, `-cw:pwd`) do not fit
//! clap's short-flag model, so clap collects them verbatim and
//! [`crate::core::ParsedCommand`] interprets them.

use clap::Parser;
use std::path::PathBuf;

use super::usage::EXAMPLES;

/// adapman - toggle network adapters and connect or disconnect WiFi
#[derive(Parser, Debug)]
#[command(name = "adapman")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(long)]
    pub quiet: bool,

    /// Show what would be done without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Action flags: -da | -ea | -dw:ssid <SSID> | -cw:ssid <SSID> -cw:pwd <PASSWORD>
    #[arg(
        value_name = "ACTION",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
