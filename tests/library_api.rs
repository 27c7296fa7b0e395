// Comparison runs driven through the public library API.
use std::ffi::OsStr;

use docmatch::core::best_match::best_match;
use docmatch::core::results::truncate_for_display;
use docmatch::infra::{CorpusScanner, ParagraphSource, TextFileSource};
use docmatch::{
    CompareError, CompareOptions, ComparisonRequest, Mode, ResultAggregator, ResultEntry, Session,
    Tier, WholeDocumentResult, compare,
};
use indicatif::ProgressBar;

mod util;

fn request(
    tmp: &assert_fs::TempDir,
    mode: Mode,
) -> ComparisonRequest
{
    ComparisonRequest {
        primary: tmp
            .path()
            .join("main.txt"),
        corpus_root: tmp
            .path()
            .to_path_buf(),
        mode,
    }
}

#[test]
fn test_session_reused_across_runs()
{
    let tmp = util::make_corpus();
    let options = CompareOptions { sort_candidates: true, ..CompareOptions::default() };
    let mut session = Session::new();

    compare(
        &request(&tmp, Mode::Paragraphs),
        &options,
        &TextFileSource,
        &mut session,
        &ProgressBar::hidden(),
    )
    .expect("first run");
    assert_eq!(session.results().len(), 4);

    compare(&request(&tmp, Mode::Whole), &options, &TextFileSource, &mut session, &ProgressBar::hidden())
        .expect("second run");
    assert_eq!(session.results().len(), 2);
    assert!(
        session
            .results()
            .iter()
            .all(|e| matches!(e, ResultEntry::Document(_)))
    );
}

#[test]
fn test_scanner_listing()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    for name in ["main.docx", "a.docx", "b.docx", "notes.txt"]
    {
        std::fs::write(tmp.path().join(name), "x").expect("write");
    }

    let scanner = CorpusScanner::new(&["docx".to_string()], &[]).expect("scanner");
    let mut found = scanner
        .scan(tmp.path(), OsStr::new("main.docx"))
        .expect("scan");
    found.sort();

    assert_eq!(found, vec!["a.docx", "b.docx"]);
}

#[test]
fn test_best_match_over_extracted_paragraphs()
{
    let tmp = util::make_corpus();
    let primary = TextFileSource
        .extract(&tmp.path().join("main.txt"))
        .expect("primary");
    let candidate = TextFileSource
        .extract(&tmp.path().join("a.txt"))
        .expect("candidate");

    assert_eq!(primary, vec!["Hello world", "Goodbye"]);

    let first = best_match(&primary[0], &candidate);
    assert_eq!(first.text, "Hello world!");
    assert!(first.ratio > 0.90);

    let second = best_match(&primary[1], &candidate);
    assert_eq!(second.text, "Hello world!");
    assert!((second.ratio - 0.3157894736842105).abs() < 1e-12);
}

#[test]
fn test_display_truncation_boundary()
{
    assert_eq!(truncate_for_display(&"z".repeat(60), 50), format!("{}...", "z".repeat(50)));
    assert_eq!(truncate_for_display(&"z".repeat(50), 50), "z".repeat(50));
}

#[test]
fn test_aggregator_reset()
{
    let mut agg = ResultAggregator::new();
    agg.push(WholeDocumentResult { document: "old.txt".into(), score: 10.0 });
    agg.reset();
    agg.push(WholeDocumentResult { document: "new.txt".into(), score: 75.0 });

    assert_eq!(agg.len(), 1);
    assert_eq!(agg.entries()[0].document(), "new.txt");
    assert_eq!(agg.entries()[0].tier(), Tier::High);
}

#[test]
fn test_missing_candidate_surfaces_filename()
{
    let tmp = util::make_corpus();
    let order = vec!["a.txt".to_string(), "vanished.txt".to_string()];
    let mut session = Session::new();

    let err = docmatch::core::engine::compare_candidates(
        &request(&tmp, Mode::Paragraphs),
        &order,
        &CompareOptions::default(),
        &TextFileSource,
        &mut session,
        &ProgressBar::hidden(),
    )
    .expect_err("missing document");

    assert!(matches!(err, CompareError::DocumentRead { .. }));
    assert!(
        err.document()
            .is_some_and(|p| p.ends_with("vanished.txt"))
    );
    assert!(session.results().is_empty());
}
