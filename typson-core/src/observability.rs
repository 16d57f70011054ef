//! Logging setup for applications using typson
//!
//! The codec itself only emits `tracing` events and spans:
//!
//! - `serialize`/`deserialize` open a `debug` span
//! - envelope pruning and lenient fallbacks log at `debug`
//! - unknown envelope tags log at `trace`
//! - values passed through by [`crate::UnsupportedPolicy::Passthrough`] log at
//!   `warn`
//!
//! Nothing is printed unless a subscriber is installed. Libraries embedding
//! typson should leave that to the application; binaries and tests can call
//! [`init_observability`] to get a ready-made `tracing-subscriber` stack.
//!
//! # Usage Pattern
//!
//! ```rust,no_run
//! use typson_core::ObservabilityConfig;
//!
//! let config = ObservabilityConfig::new("wire-inspector")
//!     .with_log_level("typson_core=trace")
//!     .with_json(true);
//!
//! typson_core::init_observability(config).expect("Failed to init observability");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (e.g. "info", "typson_core=debug"); takes
//!   precedence over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output configuration
///
/// # Defaults
///
/// - Service name: "typson"
/// - Service version: the crate version
/// - Log level: `$RUST_LOG` or "info"
/// - Plain text output
///
/// # Examples
///
/// ```rust
/// use typson_core::ObservabilityConfig;
///
/// let config = ObservabilityConfig::new("ingest")
///     .with_log_level("debug")
///     .with_json(true);
/// assert_eq!(config.log_level, "debug");
/// ```
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Recorded on the startup event
    pub service_name: String,
    pub service_version: String,
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit one JSON object per event instead of plain text
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "typson".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the filter directives ("error", "warn", "info", "debug", "trace",
    /// or per-target forms such as "typson_core=trace")
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Install a global `tracing` subscriber for `config`
///
/// # Errors
///
/// - the configured level is not a valid filter directive
/// - a global subscriber is already installed (calling this twice returns an
///   error rather than panicking)
pub fn init_observability(
    config: ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::info!(
        service.name = %config.service_name,
        service.version = %config.service_version,
        "observability initialized"
    );
    Ok(())
}
