use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::engine::Mode;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "docmatch")]
#[command(
    about = "A fast CLI for finding the best-matching paragraphs of a document across a corpus of variants"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without executing
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a document against every document in a directory
    Compare(CompareArgs),

    /// Initialize a docmatch.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored table
    Text,
    /// Single JSON document
    Json,
}

/// Comparison granularity as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Best candidate paragraph for every primary paragraph
    Paragraphs,
    /// One score per candidate document
    Whole,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Paragraphs => Mode::Paragraphs,
            ModeArg::Whole => Mode::Whole,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Primary document
    pub primary: PathBuf,

    /// Directory holding the candidate documents
    pub corpus: PathBuf,

    /// Per-paragraph best matches or one score per document
    #[arg(short, long, value_enum, default_value_t = ModeArg::Paragraphs)]
    pub mode: ModeArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Recognized document extensions (overrides config)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Additional filename globs to leave out of the corpus
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Worker threads (0 = one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Sort candidate documents by name before scoring
    #[arg(long)]
    pub sort: bool,

    /// Characters of matched text to display before truncating
    #[arg(long)]
    pub display_chars: Option<usize>,

    /// Disable the popular-character heuristic on long inputs
    #[arg(long)]
    pub no_autojunk: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
