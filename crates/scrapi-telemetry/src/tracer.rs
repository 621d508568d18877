//! Subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "SCRAPI_LOG_FORMAT";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Read the format from `SCRAPI_LOG_FORMAT`, defaulting to text
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Initialize logging using the format from the environment.
///
/// Filtering follows `RUST_LOG` (default `info`). Calling this twice is a
/// no-op with a warning, so tests and demos can both call it.
///
/// # Example
///
/// ```rust,no_run
/// use scrapi_telemetry::init_telemetry;
///
/// init_telemetry();
/// tracing::info!("ready");
/// ```
pub fn init_telemetry() {
    init_telemetry_with(LogFormat::from_env());
}

/// Initialize logging with an explicit format
pub fn init_telemetry_with(format: LogFormat) {
    if let Err(e) = try_init_telemetry(format) {
        tracing::warn!("Telemetry already initialized: {}", e);
    }
}

/// Initialize logging, reporting whether a global subscriber was already set
pub fn try_init_telemetry(format: LogFormat) -> Result<(), TryInitError> {
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
}
