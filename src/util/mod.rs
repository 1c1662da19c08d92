//! Utility modules for devfile-recognizer

pub mod logging;

pub use logging::{init_from_env, init_logging, LoggingConfig};
