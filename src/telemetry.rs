//! Tracing subscriber setup for binaries and tests embedding the crate.
//!
//! The `RUST_LOG` environment variable takes precedence over the default
//! filter passed by the caller.

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Filter used when neither the caller nor `RUST_LOG` supplies one.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl TryFrom<&str> for LogFormat {
    type Error = TelemetryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(TelemetryError::UnknownFormat(value.to_owned())),
        }
    }
}

/// Errors raised while configuring tracing.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log format name is not recognised.
    #[error("unknown log format: {0}")]
    UnknownFormat(String),

    /// A global subscriber was already installed.
    #[error(transparent)]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Builds a subscriber filtering by `RUST_LOG`, or `default_filter` when the
/// variable is unset or invalid.
#[must_use]
pub fn build_subscriber(default_filter: &str, format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => Box::new(registry.with(fmt::layer().with_target(true))),
        LogFormat::Json => Box::new(registry.with(fmt::layer().json())),
    }
}

/// Installs the subscriber from [`build_subscriber`] as the global default.
///
/// # Errors
///
/// Returns [`TelemetryError::AlreadyInstalled`] when a global subscriber is
/// already set.
pub fn init_tracing(default_filter: &str, format: LogFormat) -> Result<(), TelemetryError> {
    tracing::subscriber::set_global_default(build_subscriber(default_filter, format))?;
    Ok(())
}
