//! Tracing setup for the audit attestor
//!
//! Console-oriented subscriber initialization with env-based filtering.
//! Submission flows log structured fields (phase, attestation id, network)
//! through `tracing`; hosts embedding the library can skip this module and
//! install their own subscriber instead.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,

    /// Enable console output
    pub enable_console: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_format: false,
            enable_console: true,
        }
    }
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_format: std::env::var("LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            enable_console: std::env::var("LOG_CONSOLE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(
    config: &TelemetryConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.enable_console {
        if config.json_format {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
            subscriber.with(fmt_layer).try_init()?;
        } else {
            let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
            subscriber.with(fmt_layer).try_init()?;
        }
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}
