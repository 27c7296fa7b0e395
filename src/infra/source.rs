//! Filepath: src/infra/source.rs
//! Paragraph sources: turn a stored document into paragraph strings.
//!
//! The engine only sees the [`ParagraphSource`] trait, so other document
//! formats plug in without touching the scoring code.

use std::path::Path;

use tracing::{instrument, trace};

use crate::core::error::CompareError;
use crate::infra::io::read_lines;

/// Yields the paragraphs of a document.
pub trait ParagraphSource: Send + Sync
{
    /// Every paragraph in document order, blank ones included, untrimmed.
    fn extract_raw(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, CompareError>;

    /// Trimmed, non-empty paragraphs in document order.
    fn extract(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, CompareError>
    {
        Ok(self
            .extract_raw(path)?
            .into_iter()
            .filter_map(|p| {
                let trimmed = p.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect())
    }
}

/// Plain-text documents: each line is one paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFileSource;

impl ParagraphSource for TextFileSource
{
    #[instrument(level = "trace", skip(self))]
    fn extract_raw(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, CompareError>
    {
        let lines = read_lines(path)?;
        trace!(paragraphs = lines.len(), "extracted");
        Ok(lines)
    }
}
