//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout only carries the usage line and the run
//! summary. `RUST_LOG` overrides the level chosen from the flags.
//!
//! The subscriber is installed from the command-line flags before any
//! configuration is read; [`apply_settings`] swaps the filter once the
//! merged settings are known so `quiet`/`verbose` from a config file or the
//! environment take effect too.

use crate::error::{Result, ResultExt};
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Level used when `RUST_LOG` is not set
pub fn default_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Filter for the given flags, with `RUST_LOG` directives on top
pub fn build_filter(quiet: bool, verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(quiet, verbose).into())
        .from_env_lossy()
}

/// Install the global subscriber
pub fn init_logging(quiet: bool, verbose: bool, colored_output: bool) -> Result<()> {
    let (filter, handle) = reload::Layer::new(build_filter(quiet, verbose));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(colored_output)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .with_context(|| "Failed to initialize logging")?;

    // Only the first successful install owns the handle
    let _ = FILTER_HANDLE.set(handle);
    Ok(())
}

/// Re-derive the filter from the merged settings
///
/// A no-op when [`init_logging`] has not installed a subscriber.
pub fn apply_settings(quiet: bool, verbose: bool) -> Result<()> {
    match FILTER_HANDLE.get() {
        Some(handle) => handle
            .reload(build_filter(quiet, verbose))
            .with_context(|| "Failed to update the log filter"),
        None => Ok(()),
    }
}
