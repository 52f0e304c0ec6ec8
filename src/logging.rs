//! Tracing initialization.
//!
//! Diagnostics are written to stderr. `RUST_LOG` selects the filter; without it
//! only errors are shown, so a normal run prints just the console messages.

use anyhow::{Result, anyhow};
use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

const DEFAULT_FILTER: &str = "error";

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;

impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter())
        .with_timer(LocalHumanTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
