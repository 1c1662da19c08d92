use devfile_recognizer::cli::commands::{CliArgs, Commands};
use devfile_recognizer::cli::handlers::{handle_analyze, handle_select};
use devfile_recognizer::util::logging::{self, LoggingConfig};
use devfile_recognizer::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("devfile-recognizer v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Analyze(analyze_args) => handle_analyze(analyze_args),
        Commands::Select(select_args) => handle_select(select_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        match logging::parse_level(level_str) {
            Some(level) => config.level = level,
            None => eprintln!(
                "Invalid log level '{}', keeping {}. Valid levels: trace, debug, info, warn, error",
                level_str, config.level
            ),
        }
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    logging::init_logging(config);
}
