//! Tracing subscriber setup for hosts embedding the toolkit.
//!
//! Logs go to stderr so a host that speaks its tool protocol over stdout is
//! left untouched.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Result, ToolkitError};

/// Install the global `tracing` subscriber described by `config`.
///
/// Fails instead of panicking when the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_ansi(config.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|err| ToolkitError::Config(format!("failed to install tracing subscriber: {err}")))
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|err| ToolkitError::Config(format!("invalid log filter `{directives}`: {err}")))
}
