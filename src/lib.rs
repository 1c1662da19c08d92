//! devfile-recognizer - project language analysis and devfile type selection
//!
//! The crate measures which languages a project is written in, detects the
//! frameworks and build tools attached to each of them, and picks the devfile
//! type from a catalog that fits the project best.
//!
//! # Core Concepts
//!
//! - **Language**: a detected language with its share of the project
//!   ([`Language::usage_in_percentage`]), its frameworks and its tools
//! - **Detector**: a read-only predicate that recognises one framework or
//!   tool for a language, registered in a [`DetectorRegistry`]
//! - **Devfile type**: a catalog entry ([`DevFileType`]) targeting a
//!   language and carrying tags that raise its score
//!
//! # Example Usage
//!
//! ```no_run
//! use devfile_recognizer::{analyze, select_devfile_using_languages_from_types, DevFileType};
//! use std::path::Path;
//!
//! let catalog = vec![
//!     DevFileType::new("java-quarkus", "java", "quarkus").with_tags(["Java", "Quarkus"]),
//!     DevFileType::new("java-maven", "java", "java").with_tags(["Java", "Maven"]),
//! ];
//!
//! let languages = analyze(Path::new("/path/to/project"))?;
//! let devfile = select_devfile_using_languages_from_types(&languages, &catalog)?;
//! println!("{} ({})", devfile.name, languages[0].name);
//! # Ok::<(), devfile_recognizer::RecognizerError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`scanner`]: file tree traversal producing bytes per language
//! - [`aggregator`]: percentages, ordering and detector invocation
//! - [`detector`]: framework and tool detectors and their registry
//! - [`devfile`]: devfile types, catalog loading and selection
//! - [`recognizer`]: the entry points tying everything together

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod detector;
pub mod devfile;
pub mod error;
pub mod fs;
pub mod language;
pub mod recognizer;
pub mod scanner;
pub mod util;

pub use aggregator::{LanguageAggregator, MinimumUsage, SignificancePolicy};
pub use config::{ConfigError, RecognizerConfig};
pub use detector::{DetectionContext, Detector, DetectorKind, DetectorRegistry};
pub use devfile::{load_catalog, select_devfile_type, CatalogError, DevFileType};
pub use error::RecognizerError;
pub use language::{Language, LanguageId, LanguageRegistry};
pub use recognizer::{
    analyze, select_devfile_from_types, select_devfile_using_languages_from_types, Recognizer,
};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
