//! `compare` command: resolve settings, run the engine, render results.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::{AppContext, CompareArgs};
use crate::cli_ext::report;
use crate::core::engine::{self, CompareOptions, ComparisonRequest, Session};
use crate::infra::config::{Config, load_config};
use crate::infra::source::TextFileSource;
use crate::infra::utils::PathUtils;

pub fn run(
    args: CompareArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring invalid configuration");
        if !ctx.quiet
        {
            eprintln!("{} ignoring invalid configuration: {:#}", "warning:".yellow(), e);
        }
        Config::default()
    });

    let primary = PathUtils::expand(&args.primary)?;
    let corpus = PathUtils::expand(&args.corpus)?;

    // Inputs are validated up front; the engine assumes they exist
    if !primary.is_file()
    {
        anyhow::bail!("Primary document does not exist: {}", primary.display());
    }
    if !corpus.is_dir()
    {
        anyhow::bail!("Corpus directory does not exist: {}", corpus.display());
    }

    let options = resolve_options(&args, config);
    let request = ComparisonRequest { primary, corpus_root: corpus, mode: args.mode.into() };

    if ctx.dry_run
    {
        let candidates = engine::scan_corpus(&request, &options)
            .context("Failed to scan corpus directory")?;

        if !ctx.quiet
        {
            println!("{}", "DRY RUN: Would compare:".yellow());
            println!("  Primary: {}", request.primary.display());
            println!("  Mode: {:?}", request.mode);
            for name in &candidates
            {
                println!("  {}", name);
            }
            println!("{}", format!("{} candidate document(s)", candidates.len()).yellow());
        }
        return Ok(());
    }

    let progress = if ctx.quiet
    {
        ProgressBar::hidden()
    }
    else
    {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .context("Invalid progress template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let mut session = Session::new();
    engine::compare(&request, &options, &TextFileSource, &mut session, &progress)
        .context("Comparison failed")?;

    progress.finish_and_clear();

    report::render(&request, &session, args.format, ctx)
}

/// CLI flags win over config values.
fn resolve_options(
    args: &CompareArgs,
    config: Config,
) -> CompareOptions
{
    let extensions = if args
        .extensions
        .is_empty()
    {
        config.extensions
    }
    else
    {
        args.extensions
            .clone()
    };

    let mut exclude = config.exclude;
    exclude.extend(
        args.exclude
            .iter()
            .cloned(),
    );

    CompareOptions {
        extensions,
        exclude,
        display_chars: args
            .display_chars
            .unwrap_or(config.display_chars),
        jobs: args
            .jobs
            .unwrap_or(config.jobs),
        autojunk: config.autojunk && !args.no_autojunk,
        sort_candidates: config.sort_candidates || args.sort,
    }
}
