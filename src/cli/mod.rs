//! cli
//!
//! Command-line interface layer for adapman.
//!
//! # Responsibilities
//!
//! - Parse global options via clap
//! - Turn the action flags into a [`ParsedCommand`], once
//! - Print usage and fail when the action flags are invalid
//! - Hand the command and its collaborators to [`commands::dispatch`]

pub mod args;
pub mod commands;
pub mod usage;

pub use args::Cli;
pub use usage::usage;

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::adapter::SystemAdapterManager;
use crate::core::config::Config;
use crate::core::ParsedCommand;
use crate::runner::{Platform, SystemRunner};
use crate::ui::output::{self, Verbosity};
use crate::wifi::system_wifi;

/// Settings shared by every command handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// How much to print.
    pub verbosity: Verbosity,
    /// Report instead of acting.
    pub dry_run: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns a failure
/// exit code, after printing usage, when the action flags are invalid.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug || config.debug());
    if let Some(path) = config.path() {
        output::debug(
            format!("loaded configuration from {}", path.display()),
            verbosity,
        );
    }

    let Some(command) = ParsedCommand::parse(&cli.args) else {
        output::error("invalid command line");
        eprintln!("\n{}", usage());
        return Ok(ExitCode::FAILURE);
    };

    let ctx = Context {
        verbosity,
        dry_run: cli.dry_run,
    };
    let adapters = SystemAdapterManager::new(config.adapter_exclusions());
    let wifi = system_wifi(
        SystemRunner,
        Platform::current(),
        config.wifi_interface().map(str::to_string),
    );

    commands::dispatch(&command, &ctx, &adapters, wifi.as_ref())?;
    Ok(ExitCode::SUCCESS)
}
