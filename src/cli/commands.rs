//! cli::commands
//!
//! Dispatch of a parsed command to the adapter and WiFi managers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Reports what it is about to do (debug output)
//! 2. Calls the manager, unless this is a dry run
//! 3. Formats and displays the outcome
//!
//! Managers are passed in explicitly, so handlers can be exercised with
//! scripted runners.

use anyhow::{Context as _, Result};

use super::Context;
use crate::adapter::AdapterManager;
use crate::core::{Action, ParsedCommand};
use crate::ui::output;
use crate::wifi::WifiManager;

/// Dispatch a command to its handler.
pub fn dispatch(
    command: &ParsedCommand,
    ctx: &Context,
    adapters: &dyn AdapterManager,
    wifi: &dyn WifiManager,
) -> Result<()> {
    output::debug(format!("dispatching {:?}", command), ctx.verbosity);

    match command.action() {
        Action::DisableAllAdapters => set_all_adapters(ctx, adapters, false),
        Action::EnableAllAdapters => set_all_adapters(ctx, adapters, true),
        Action::ConnectWifi => connect_wifi(
            ctx,
            wifi,
            command.wifi_ssid(),
            command.wifi_password(),
        ),
        Action::DisconnectWifi => disconnect_wifi(ctx, wifi, command.wifi_ssid()),
        Action::Unknown => {
            output::debug("nothing to do", ctx.verbosity);
            Ok(())
        }
    }
}

fn set_all_adapters(ctx: &Context, adapters: &dyn AdapterManager, enabled: bool) -> Result<()> {
    let verb = if enabled { "enable" } else { "disable" };

    if ctx.dry_run {
        let pending: Vec<_> = adapters
            .adapters()
            .context("Failed to list network adapters")?
            .into_iter()
            .filter(|a| a.enabled != enabled)
            .collect();

        if pending.is_empty() {
            output::print(format!("Nothing to {}.", verb), ctx.verbosity);
        } else {
            output::print(format!("Would {}:", verb), ctx.verbosity);
            output::print(output::format_list(&pending, "  "), ctx.verbosity);
        }
        return Ok(());
    }

    let result = if enabled {
        adapters.enable_all()
    } else {
        adapters.disable_all()
    };
    let changed = result.with_context(|| format!("Failed to {} network adapters", verb))?;

    if changed.is_empty() {
        output::warn(
            format!("no adapters needed to be {}d", verb),
            ctx.verbosity,
        );
    } else {
        let past = if enabled { "Enabled" } else { "Disabled" };
        output::print(format!("{}:", past), ctx.verbosity);
        output::print(output::format_list(&changed, "  "), ctx.verbosity);
    }
    Ok(())
}

fn connect_wifi(ctx: &Context, wifi: &dyn WifiManager, ssid: &str, password: &str) -> Result<()> {
    if password.is_empty() {
        output::debug("connecting with an empty network key", ctx.verbosity);
    }

    if ctx.dry_run {
        output::print(format!("Would connect to '{}'", ssid), ctx.verbosity);
        return Ok(());
    }

    wifi.connect(ssid, password)
        .with_context(|| format!("Failed to connect to '{}'", ssid))?;
    output::print(format!("Connected to '{}'", ssid), ctx.verbosity);
    Ok(())
}

fn disconnect_wifi(ctx: &Context, wifi: &dyn WifiManager, ssid: &str) -> Result<()> {
    if ctx.dry_run {
        output::print(format!("Would disconnect from '{}'", ssid), ctx.verbosity);
        return Ok(());
    }

    wifi.disconnect(ssid)
        .with_context(|| format!("Failed to disconnect from '{}'", ssid))?;
    output::print(format!("Disconnected from '{}'", ssid), ctx.verbosity);
    Ok(())
}
