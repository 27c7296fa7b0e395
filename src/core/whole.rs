//! Whole-document comparison: each document becomes one string.

use crate::core::similarity::ratio_with;

/// Join raw paragraphs (blank ones included) with line breaks.
pub fn join_raw(paragraphs: &[String]) -> String
{
    paragraphs.join("\n")
}

/// Ratio of two whole documents given as raw paragraph sequences.
pub fn compare_documents(
    primary: &[String],
    candidate: &[String],
    autojunk: bool,
) -> f64
{
    ratio_with(&join_raw(primary), &join_raw(candidate), autojunk)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn raw(items: &[&str]) -> Vec<String>
    {
        items
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_blank_paragraphs_are_kept()
    {
        let text = join_raw(&raw(&["Title", "", "  Body  "]));
        assert_eq!(text, "Title\n\n  Body  ");
    }

    #[test]
    fn test_identical_documents()
    {
        let doc = raw(&["one", "", "two"]);
        assert_eq!(compare_documents(&doc, &doc, true), 1.0);
    }

    #[test]
    fn test_reference_value()
    {
        let a = raw(&["Hello world", "", "Goodbye"]);
        let b = raw(&["Hello world!", "Something else"]);
        let r = compare_documents(&a, &b, true);
        assert!((r - 0.5957446808510638).abs() < 1e-12);

        // Dropping the blank paragraph changes the score
        let trimmed = raw(&["Hello world", "Goodbye"]);
        let r = compare_documents(&trimmed, &b, true);
        assert!((r - 0.6086956521739131).abs() < 1e-12);
    }

    #[test]
    fn test_empty_documents()
    {
        assert_eq!(compare_documents(&[], &[], true), 1.0);
        assert_eq!(compare_documents(&[], &raw(&["x"]), true), 0.0);
    }
}
