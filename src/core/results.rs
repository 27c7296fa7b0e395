//! Result entries and the per-run aggregator.
//!
//! Tiers are never stored: they are derived from the score on access and
//! when serialized.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::tier::Tier;

/// Characters of matched text shown before truncation
pub const DEFAULT_DISPLAY_CHARS: usize = 50;

/// Marker appended to truncated matched text
pub const ELLIPSIS: &str = "...";

/// Best match of one primary paragraph within one candidate document
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult
{
    /// 1-based paragraph index in the primary document
    pub paragraph_index: usize,
    pub document: String,
    /// Display-truncated text of the best candidate paragraph
    pub matched_text: String,
    /// Percentage in `[0, 100]`, two decimals
    pub score: f64,
}

impl MatchResult
{
    pub fn tier(&self) -> Tier
    {
        Tier::classify(self.score)
    }
}

/// Whole-document similarity against one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct WholeDocumentResult
{
    pub document: String,
    pub score: f64,
}

impl WholeDocumentResult
{
    pub fn tier(&self) -> Tier
    {
        Tier::classify(self.score)
    }
}

impl Serialize for MatchResult
{
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    {
        let mut s = serializer.serialize_struct("MatchResult", 5)?;
        s.serialize_field("paragraph", &self.paragraph_index)?;
        s.serialize_field("document", &self.document)?;
        s.serialize_field("matched_text", &self.matched_text)?;
        s.serialize_field("score", &self.score)?;
        s.serialize_field("tier", &self.tier())?;
        s.end()
    }
}

impl Serialize for WholeDocumentResult
{
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    {
        let mut s = serializer.serialize_struct("WholeDocumentResult", 3)?;
        s.serialize_field("document", &self.document)?;
        s.serialize_field("score", &self.score)?;
        s.serialize_field("tier", &self.tier())?;
        s.end()
    }
}

/// One aggregated entry, in either comparison mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultEntry
{
    Paragraph(MatchResult),
    Document(WholeDocumentResult),
}

impl ResultEntry
{
    pub fn document(&self) -> &str
    {
        match self
        {
            ResultEntry::Paragraph(m) => &m.document,
            ResultEntry::Document(d) => &d.document,
        }
    }

    pub fn score(&self) -> f64
    {
        match self
        {
            ResultEntry::Paragraph(m) => m.score,
            ResultEntry::Document(d) => d.score,
        }
    }

    pub fn tier(&self) -> Tier
    {
        Tier::classify(self.score())
    }
}

impl From<MatchResult> for ResultEntry
{
    fn from(m: MatchResult) -> Self
    {
        ResultEntry::Paragraph(m)
    }
}

impl From<WholeDocumentResult> for ResultEntry
{
    fn from(d: WholeDocumentResult) -> Self
    {
        ResultEntry::Document(d)
    }
}

/// Ordered collection of result entries for a single run.
#[derive(Debug, Default)]
pub struct ResultAggregator
{
    entries: Vec<ResultEntry>,
}

impl ResultAggregator
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Discard every entry; called before each run.
    pub fn reset(&mut self)
    {
        self.entries
            .clear();
    }

    pub fn push(
        &mut self,
        entry: impl Into<ResultEntry>,
    )
    {
        self.entries
            .push(entry.into());
    }

    pub fn extend<I>(
        &mut self,
        entries: I,
    ) where
        I: IntoIterator,
        I::Item: Into<ResultEntry>,
    {
        self.entries
            .extend(
                entries
                    .into_iter()
                    .map(Into::into),
            );
    }

    /// Entries in production order
    pub fn entries(&self) -> &[ResultEntry]
    {
        &self.entries
    }

    pub fn len(&self) -> usize
    {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries
            .is_empty()
    }
}

/// Shorten `text` to `max_chars` characters plus [`ELLIPSIS`] when longer.
pub fn truncate_for_display(
    text: &str,
    max_chars: usize,
) -> String
{
    match text
        .char_indices()
        .nth(max_chars)
    {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn para(
        idx: usize,
        doc: &str,
        score: f64,
    ) -> MatchResult
    {
        MatchResult {
            paragraph_index: idx,
            document: doc.to_string(),
            matched_text: String::new(),
            score,
        }
    }

    #[test]
    fn test_truncate_long_text()
    {
        let text = "x".repeat(60);
        let shown = truncate_for_display(&text, DEFAULT_DISPLAY_CHARS);
        assert_eq!(shown, format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn test_truncate_exact_length_unmodified()
    {
        let text = "y".repeat(50);
        assert_eq!(truncate_for_display(&text, DEFAULT_DISPLAY_CHARS), text);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes()
    {
        let text = "ä".repeat(51);
        let shown = truncate_for_display(&text, DEFAULT_DISPLAY_CHARS);
        assert_eq!(
            shown
                .chars()
                .count(),
            53
        );
        assert!(shown.ends_with("ä..."));
    }

    #[test]
    fn test_tier_derived_from_score()
    {
        assert_eq!(para(1, "a.txt", 29.99).tier(), Tier::Low);
        let whole = WholeDocumentResult { document: "a.txt".into(), score: 60.0 };
        assert_eq!(whole.tier(), Tier::High);
    }

    #[test]
    fn test_reset_discards_previous_run()
    {
        let mut agg = ResultAggregator::new();
        agg.push(para(1, "old.txt", 10.0));
        agg.push(para(2, "old.txt", 20.0));

        agg.reset();
        assert!(agg.is_empty());

        agg.push(para(1, "new.txt", 90.0));
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.entries()[0].document(), "new.txt");
    }

    #[test]
    fn test_serialized_entry_carries_tier()
    {
        let v = serde_json::to_value(ResultEntry::from(para(3, "b.txt", 45.5))).unwrap();
        assert_eq!(v["paragraph"], 3);
        assert_eq!(v["tier"], "medium");
        assert_eq!(v["score"], 45.5);
    }
}
