use anyhow::Result;
use clap::Parser;
use docmatch::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; DOCMATCH_LOG=debug for per-document detail
    let filter = EnvFilter::try_from_env("DOCMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Compare(args) => docmatch::compare_run(args, &ctx),
        Commands::Init(args) => docmatch::infra::config::init(args, &ctx),
        Commands::Completions(args) => docmatch::completion::run(args, &ctx),
    }
}
