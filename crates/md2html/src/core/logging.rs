//! Logging infrastructure for document conversion
//!
//! Structured logging uses the `tracing` crate. Events are written to
//! stderr so they never mix with the converter's console messages.
//!
//! # Usage
//!
//! ```rust
//! use md2html::core::logging::init_logging;
//!
//! // Level and format from the environment, or warn/compact
//! let _ = init_logging(None, None);
//! ```
//!
//! # Environment Variables
//!
//! - `MD2HTML_LOG_LEVEL`: level or filter directive (trace|debug|info|warn|error|off)
//! - `RUST_LOG`: consulted when `MD2HTML_LOG_LEVEL` is unset
//! - `MD2HTML_LOG_FORMAT`: compact|pretty|json
//!
//! ```bash
//! # Only the renderer at debug level
//! RUST_LOG="md2html::markdown=debug" markdown_to_html_converter markdown in.md out.html
//! ```

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

const DEFAULT_LEVEL: &str = "warn";
const DEFAULT_FORMAT: &str = "compact";

/// Why a subscriber could not be installed
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Unknown log format '{0}' (expected compact, pretty or json)")]
    UnknownFormat(String),

    #[error("Invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Log output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event, no targets
    Compact,
    /// Multi-line with source locations and span activity
    Pretty,
    /// One JSON object per event, spans reported on close
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggingError::UnknownFormat(s.to_string())),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    /// stderr layer for this layout
    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::layer().with_writer(std::io::stderr);
        match self {
            LogFormat::Compact => base
                .compact()
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .boxed(),
            LogFormat::Pretty => base
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .boxed(),
            LogFormat::Json => base.json().with_span_events(FmtSpan::CLOSE).boxed(),
        }
    }
}

/// First of: the explicit value, then each environment variable in order
fn resolve(explicit: Option<&str>, vars: &[&str], default: &str) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| vars.iter().find_map(|var| std::env::var(var).ok()))
        .unwrap_or_else(|| default.to_string())
}

/// Install the global subscriber
///
/// `level` is a level name or an `EnvFilter` directive; `format` is one of
/// [`LogFormat::variants`]. Either falls back to the environment, then to
/// `warn` / `compact`. Fails if a subscriber is already installed.
pub fn init_logging(level: Option<&str>, format: Option<&str>) -> Result<(), LoggingError> {
    let directive = resolve(level, &["MD2HTML_LOG_LEVEL", "RUST_LOG"], DEFAULT_LEVEL);
    let format: LogFormat = resolve(format, &["MD2HTML_LOG_FORMAT"], DEFAULT_FORMAT).parse()?;

    let filter = EnvFilter::try_new(&directive).map_err(|source| LoggingError::InvalidFilter {
        directive: directive.clone(),
        source,
    })?;

    tracing_subscriber::registry()
        .with(format.layer())
        .with(filter)
        .try_init()?;
    Ok(())
}
