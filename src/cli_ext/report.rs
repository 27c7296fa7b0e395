//! Result rendering for the `compare` command.
//!
//! Text output is a table with the score cell colored by tier
//! (low red, medium yellow, high green). JSON output is a single
//! object with every entry carrying its tier.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Style};
use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::{AppContext, OutputFormat};
use crate::core::engine::{ComparisonRequest, Session};
use crate::core::results::ResultEntry;
use crate::core::tier::Tier;

#[derive(Tabled)]
struct ParagraphRow
{
    #[tabled(rename = "Paragraph")]
    paragraph: String,
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Best match")]
    matched_text: String,
    #[tabled(rename = "Similarity")]
    score: String,
}

#[derive(Tabled)]
struct DocumentRow
{
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Similarity")]
    score: String,
}

pub fn render(
    request: &ComparisonRequest,
    session: &Session,
    format: OutputFormat,
    ctx: &AppContext,
) -> Result<()>
{
    match format
    {
        OutputFormat::Json => println!("{}", to_json(request, session)?),
        OutputFormat::Text => print_table(session, ctx),
    }
    Ok(())
}

/// Single-line JSON document for a finished run.
pub fn to_json(
    request: &ComparisonRequest,
    session: &Session,
) -> Result<String>
{
    let output = json!({
        "mode": request.mode,
        "primary": request.primary.display().to_string(),
        "corpus": request.corpus_root.display().to_string(),
        "candidates": session.candidates(),
        "results": session.results(),
    });

    serde_json::to_string(&output).context("Failed to serialize results")
}

fn print_table(
    session: &Session,
    ctx: &AppContext,
)
{
    let results = session.results();
    if results.is_empty()
    {
        if !ctx.quiet
        {
            println!("No candidate documents found");
        }
        return;
    }

    let mut paragraph_rows = Vec::new();
    let mut document_rows = Vec::new();

    for entry in results
    {
        let score = format_score(entry.score(), entry.tier(), ctx.no_color);
        match entry
        {
            ResultEntry::Paragraph(m) => paragraph_rows.push(ParagraphRow {
                paragraph: format!("Paragraph {}", m.paragraph_index),
                document: m
                    .document
                    .clone(),
                matched_text: m
                    .matched_text
                    .clone(),
                score,
            }),
            ResultEntry::Document(d) => document_rows.push(DocumentRow {
                document: d
                    .document
                    .clone(),
                score,
            }),
        }
    }

    if !paragraph_rows.is_empty()
    {
        println!("{}", Table::new(paragraph_rows));
    }
    if !document_rows.is_empty()
    {
        println!("{}", Table::new(document_rows));
    }
}

/// `95.65%` or `30.0%`, colored by tier unless color is disabled.
///
/// Whole scores keep their trailing `.0`.
fn format_score(
    score: f64,
    tier: Tier,
    no_color: bool,
) -> String
{
    let text = format!("{:?}%", score);
    if no_color
    {
        return text;
    }

    let style = match tier
    {
        Tier::Low => Style::new()
            .white()
            .on_red(),
        Tier::Medium => Style::new()
            .black()
            .on_yellow(),
        Tier::High => Style::new()
            .white()
            .on_green(),
    };

    text.style(style)
        .to_string()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_plain_score_format()
    {
        assert_eq!(format_score(95.65, Tier::High, true), "95.65%");
        assert_eq!(format_score(30.0, Tier::Medium, true), "30.0%");
        assert_eq!(format_score(100.0, Tier::High, true), "100.0%");
        assert_eq!(format_score(0.0, Tier::Low, true), "0.0%");
    }

    #[test]
    fn test_colored_score_keeps_text()
    {
        let s = format_score(12.5, Tier::Low, false);
        assert!(s.contains("12.5%"));
        assert_ne!(s, "12.5%");
    }
}
