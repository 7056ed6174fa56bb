//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! lines a command renders for the user.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Examples
///
/// ```no_run
/// use paas_common::telemetry::init_tracing;
///
/// init_tracing("debug", false).expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(log_level: &str, json_format: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = Registry::default().with(env_filter);

    if json_format {
        registry
            .with(json_layer())
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    } else {
        registry
            .with(compact_layer())
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    }

    Ok(())
}

/// Create a JSON logging layer
fn json_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_current_span(true)
        .with_target(true)
        .with_level(true)
}

/// Create a compact human-readable logging layer
fn compact_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
}

/// Structured debug logging with key-value pairs.
///
/// ```ignore
/// use paas_common::log_debug;
///
/// log_debug!("Requirement passed", requirement = "login");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::debug!($($key = ?$value,)* $msg)
    };
}

/// Structured warning logging with key-value pairs.
#[macro_export]
macro_rules! log_warn {
    ($msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::warn!($($key = ?$value,)* $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_reports_error() {
        // Only one global subscriber may exist per process; whichever call
        // comes second must fail rather than panic.
        let first = init_tracing("info", false);
        let second = init_tracing("info", true);
        assert!(first.is_err() || second.is_err());
    }
}
