use super::commands::{AnalyzeArgs, SelectArgs};
use super::output::OutputFormatter;
use crate::config::RecognizerConfig;
use crate::devfile::load_catalog;
use crate::error::RecognizerError;
use crate::recognizer::Recognizer;
use std::path::PathBuf;
use tracing::debug;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RECOGNIZER_ERROR: i32 = 1;
pub const EXIT_INPUT_ERROR: i32 = 2;

fn project_path(path: &Option<PathBuf>) -> PathBuf {
    path.clone().unwrap_or_else(|| PathBuf::from("."))
}

fn load_config() -> Result<RecognizerConfig, i32> {
    let config = RecognizerConfig::from_env().and_then(|c| c.validate().map(|_| c));
    config.map_err(|e| {
        eprintln!("Error: {}", e);
        EXIT_INPUT_ERROR
    })
}

fn report_recognizer_error(err: &RecognizerError) -> i32 {
    debug!(error = ?err, "Recognition failed");
    eprintln!("Error: {}", err);
    EXIT_RECOGNIZER_ERROR
}

fn print(result: anyhow::Result<String>) -> i32 {
    match result {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_RECOGNIZER_ERROR
        }
    }
}

pub fn handle_analyze(args: &AnalyzeArgs) -> i32 {
    let config = match load_config() {
        Ok(c) => c,
        Err(code) => return code,
    };
    let path = project_path(&args.path);
    debug!(path = %path.display(), "Analyzing project");

    let languages = match Recognizer::with_config(config).analyze(&path) {
        Ok(languages) => languages,
        Err(e) => return report_recognizer_error(&e),
    };

    print(OutputFormatter::new(args.format.into()).format_languages(&languages))
}

pub fn handle_select(args: &SelectArgs) -> i32 {
    let config = match load_config() {
        Ok(c) => c,
        Err(code) => return code,
    };

    let catalog = match load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_INPUT_ERROR;
        }
    };

    let path = project_path(&args.path);
    debug!(path = %path.display(), entries = catalog.len(), "Selecting devfile type");

    let devfile = match Recognizer::with_config(config).select_devfile_from_types(&path, &catalog) {
        Ok(devfile) => devfile,
        Err(e) => return report_recognizer_error(&e),
    };

    print(OutputFormatter::new(args.format.into()).format_devfile(&devfile))
}
