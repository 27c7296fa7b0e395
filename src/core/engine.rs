//! Filepath: src/core/engine.rs
//! Comparison runs: scan the corpus, score every candidate, publish results.
//!
//! A run is synchronous and all-or-nothing. Candidates are scored on an
//! explicit rayon pool and collected in candidate order, so the published
//! order matches a sequential run: candidate documents outer, primary
//! paragraph index ascending inner. An unreadable document aborts the run
//! and leaves the session empty; when several fail, the error names the
//! first one in candidate order.

use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::best_match::BestMatchFinder;
use crate::core::error::CompareError;
use crate::core::results::{
    DEFAULT_DISPLAY_CHARS, MatchResult, ResultAggregator, ResultEntry, WholeDocumentResult,
    truncate_for_display,
};
use crate::core::similarity::{ratio_with, to_score};
use crate::core::whole::join_raw;
use crate::infra::source::ParagraphSource;
use crate::infra::walk::CorpusScanner;

/// Comparison granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode
{
    /// Best candidate paragraph for every primary paragraph
    Paragraphs,
    /// One score per candidate document
    Whole,
}

/// What to compare
#[derive(Debug, Clone)]
pub struct ComparisonRequest
{
    pub primary: PathBuf,
    pub corpus_root: PathBuf,
    pub mode: Mode,
}

/// Knobs that shape a run without changing what is compared
#[derive(Debug, Clone)]
pub struct CompareOptions
{
    /// Recognized document extensions
    pub extensions: Vec<String>,
    /// Extra filename globs to leave out of the corpus
    pub exclude: Vec<String>,
    /// Characters of matched text kept for display
    pub display_chars: usize,
    /// Worker threads; 0 lets rayon decide
    pub jobs: usize,
    /// Popular-character heuristic for long inputs
    pub autojunk: bool,
    /// Sort candidate names before scoring
    pub sort_candidates: bool,
}

impl Default for CompareOptions
{
    fn default() -> Self
    {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string()],
            exclude: Vec::new(),
            display_chars: DEFAULT_DISPLAY_CHARS,
            jobs: 0,
            autojunk: true,
            sort_candidates: false,
        }
    }
}

/// Caller-owned state of one comparison run.
///
/// Concurrent runs each need their own session.
#[derive(Debug, Default)]
pub struct Session
{
    aggregator: ResultAggregator,
    candidates: Vec<String>,
}

impl Session
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Results of the last successful run, in production order
    pub fn results(&self) -> &[ResultEntry]
    {
        self.aggregator
            .entries()
    }

    /// Candidate documents of the last run, in scoring order
    pub fn candidates(&self) -> &[String]
    {
        &self.candidates
    }

    fn reset(&mut self)
    {
        self.aggregator
            .reset();
        self.candidates
            .clear();
    }
}

/// List the candidate documents for `request`, honouring `sort_candidates`.
pub fn scan_corpus(
    request: &ComparisonRequest,
    options: &CompareOptions,
) -> Result<Vec<String>, CompareError>
{
    let scanner = CorpusScanner::new(&options.extensions, &options.exclude)?;
    let primary_name = request
        .primary
        .file_name()
        .unwrap_or(request.primary.as_os_str());

    let mut candidates = scanner.scan(&request.corpus_root, primary_name)?;
    if options.sort_candidates
    {
        candidates.sort();
    }

    Ok(candidates)
}

/// Run a full comparison: scan the corpus, then score every candidate.
pub fn compare(
    request: &ComparisonRequest,
    options: &CompareOptions,
    source: &dyn ParagraphSource,
    session: &mut Session,
    progress: &ProgressBar,
) -> Result<(), CompareError>
{
    session.reset();
    let candidates = scan_corpus(request, options)?;
    compare_candidates(request, &candidates, options, source, session, progress)
}

/// Score an already-ordered list of candidate filenames under `corpus_root`.
#[instrument(
    skip(options, source, session, progress, candidates),
    fields(primary = %request.primary.display(), mode = ?request.mode, candidates = candidates.len())
)]
pub fn compare_candidates(
    request: &ComparisonRequest,
    candidates: &[String],
    options: &CompareOptions,
    source: &dyn ParagraphSource,
    session: &mut Session,
    progress: &ProgressBar,
) -> Result<(), CompareError>
{
    session.reset();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()?;

    progress.set_length(candidates.len() as u64);

    let per_document: Vec<Vec<ResultEntry>> = match request.mode
    {
        Mode::Paragraphs =>
        {
            let primary = source.extract(&request.primary)?;
            debug!(paragraphs = primary.len(), "primary extracted");

            pool.install(|| {
                candidates
                    .par_iter()
                    .map(|name| {
                        let path = request
                            .corpus_root
                            .join(name);
                        let entries =
                            score_paragraphs(&primary, name, &path, options, source)?;
                        progress.inc(1);
                        Ok(entries)
                    })
                    .collect::<Vec<Result<_, CompareError>>>()
            })
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
        }
        Mode::Whole =>
        {
            let primary = join_raw(&source.extract_raw(&request.primary)?);

            pool.install(|| {
                candidates
                    .par_iter()
                    .map(|name| {
                        let path = request
                            .corpus_root
                            .join(name);
                        let entry = score_whole(&primary, name, &path, options, source)?;
                        progress.inc(1);
                        Ok(vec![entry])
                    })
                    .collect::<Vec<Result<_, CompareError>>>()
            })
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
        }
    };

    // Publish only once every document has been scored
    session.candidates = candidates.to_vec();
    session
        .aggregator
        .extend(
            per_document
                .into_iter()
                .flatten(),
        );

    info!(results = session.aggregator.len(), "comparison complete");
    Ok(())
}

/// Best match of every primary paragraph within one candidate document.
fn score_paragraphs(
    primary: &[String],
    name: &str,
    path: &Path,
    options: &CompareOptions,
    source: &dyn ParagraphSource,
) -> Result<Vec<ResultEntry>, CompareError>
{
    let paragraphs = source.extract(path)?;
    debug!(document = name, paragraphs = paragraphs.len(), "scoring paragraphs");

    let mut finder = BestMatchFinder::new(&paragraphs, options.autojunk);

    Ok(primary
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let best = finder.find(p);
            ResultEntry::from(MatchResult {
                paragraph_index: idx + 1,
                document: name.to_string(),
                matched_text: truncate_for_display(&best.text, options.display_chars),
                score: to_score(best.ratio),
            })
        })
        .collect())
}

/// Whole-document score of one candidate.
fn score_whole(
    primary: &str,
    name: &str,
    path: &Path,
    options: &CompareOptions,
    source: &dyn ParagraphSource,
) -> Result<ResultEntry, CompareError>
{
    let text = join_raw(&source.extract_raw(path)?);
    let score = to_score(ratio_with(primary, &text, options.autojunk));
    debug!(document = name, score, "scored document");

    Ok(WholeDocumentResult { document: name.to_string(), score }.into())
}
