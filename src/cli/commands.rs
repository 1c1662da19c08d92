use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Detects project languages and picks a matching devfile type
#[derive(Parser, Debug)]
#[command(
    name = "devfile-recognizer",
    about = "Detects project languages, frameworks and tools and picks a matching devfile type",
    version,
    long_about = "devfile-recognizer measures the languages used in a project, detects the \
                  frameworks and build tools each of them relies on, and scores a catalog of \
                  devfile types to select the one that fits the project best."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List the languages used by a project",
        long_about = "Measures every recognised source file and reports each language with its \
                      share of the project, its frameworks and its tools.\n\n\
                      Examples:\n  \
                      devfile-recognizer analyze\n  \
                      devfile-recognizer analyze /path/to/project --format json"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Select the best devfile type for a project",
        long_about = "Analyzes the project and scores every catalog entry targeting its primary \
                      language. The catalog is a YAML or JSON list of devfile types.\n\n\
                      Examples:\n  \
                      devfile-recognizer select --catalog devfiles.yaml\n  \
                      devfile-recognizer select /path/to/project --catalog devfiles.json -f json"
    )]
    Select(SelectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(value_name = "PATH", help = "Project directory (defaults to current directory)")]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct SelectArgs {
    #[arg(value_name = "PATH", help = "Project directory (defaults to current directory)")]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Devfile type catalog (.yaml, .yml or .json)"
    )]
    pub catalog: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
