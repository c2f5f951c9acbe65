//! Logging and tracing bootstrap.
//!
//! Diagnostics always go to stderr; stdout belongs to the status report.

use anyhow::Context;
use pidpi_kernel::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

const RUST_LOG_ENV: &str = "RUST_LOG";

/// Install the global tracing subscriber described by `settings`.
///
/// `RUST_LOG` takes precedence over the configured level when it holds a
/// valid directive. Calling this more than once keeps the first subscriber.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let rust_log = std::env::var(RUST_LOG_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), &settings.log_level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!(
            target: "pidpi-telemetry",
            "global subscriber already installed, keeping it"
        );
        return Ok(());
    }

    tracing::debug!(
        target: "pidpi-telemetry",
        format = ?settings.log_format,
        level = %settings.log_level,
        "telemetry initialized"
    );
    Ok(())
}

fn build_filter(rust_log: Option<&str>, configured: &str) -> anyhow::Result<EnvFilter> {
    if let Some(directives) = rust_log {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }

    EnvFilter::try_new(configured)
        .with_context(|| format!("invalid log level directive '{}'", configured))
}
