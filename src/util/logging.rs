//! Structured logging setup
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary (or to an embedding application). Output goes to stderr so that
//! machine-readable results on stdout stay clean.
//!
//! ```no_run
//! use devfile_recognizer::util::logging;
//!
//! logging::init_from_env();
//! tracing::info!(path = ".", "Analyzing project");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const CRATE_TARGET: &str = "devfile_recognizer";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events
    pub level: Level,

    /// Emit one JSON object per event instead of human readable lines
    pub use_json: bool,

    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Reads `RECOGNIZER_LOG_LEVEL` and `RECOGNIZER_LOG_JSON`.
    pub fn from_env() -> Self {
        let level = env::var("RECOGNIZER_LOG_LEVEL")
            .ok()
            .and_then(|l| parse_level(&l))
            .unwrap_or(Level::WARN);

        let use_json = env::var("RECOGNIZER_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let config = Self::with_level(level);
        if use_json {
            config.json()
        } else {
            config
        }
    }

    pub fn json(mut self) -> Self {
        self.use_json = true;
        self.include_target = true;
        self
    }
}

/// Parses a level name case-insensitively; unknown names yield `None`.
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Only the first call has an effect.
///
/// `RUST_LOG`, when set, adds directives on top of the configured level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(config.level).into())
            .from_env_lossy();
        if let Ok(directive) = format!("{}={}", CRATE_TARGET, config.level).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
