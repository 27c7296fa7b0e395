//! Per-paragraph best-match selection within one candidate document.

use crate::core::similarity::SequenceMatcher;

/// Highest-scoring candidate paragraph for one primary paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch
{
    /// Raw ratio in `[0.0, 1.0]`
    pub ratio: f64,
    /// 0-based position of the winning paragraph, `None` when nothing scored above 0
    pub candidate_index: Option<usize>,
    /// Full, untruncated text of the winning paragraph (empty when none)
    pub text: String,
}

impl BestMatch
{
    fn none() -> Self
    {
        Self { ratio: 0.0, candidate_index: None, text: String::new() }
    }
}

/// Scores primary paragraphs against the paragraphs of one candidate document.
///
/// Each candidate paragraph is indexed once and reused for every primary paragraph.
pub struct BestMatchFinder<'a>
{
    candidates: &'a [String],
    matchers: Vec<SequenceMatcher>,
}

impl<'a> BestMatchFinder<'a>
{
    pub fn new(
        candidates: &'a [String],
        autojunk: bool,
    ) -> Self
    {
        let matchers = candidates
            .iter()
            .map(|c| SequenceMatcher::with_autojunk("", c, autojunk))
            .collect();

        Self { candidates, matchers }
    }

    /// Best match for `primary`. Every candidate is scored; on equal scores the
    /// earlier candidate is kept.
    pub fn find(
        &mut self,
        primary: &str,
    ) -> BestMatch
    {
        let mut best = BestMatch::none();

        for (idx, matcher) in self
            .matchers
            .iter_mut()
            .enumerate()
        {
            matcher.set_seq1(primary);
            let r = matcher.ratio();

            if r > best.ratio
            {
                best.ratio = r;
                best.candidate_index = Some(idx);
            }
        }

        if let Some(idx) = best.candidate_index
        {
            best.text = self.candidates[idx].clone();
        }

        best
    }
}

/// One-shot best match of `primary` over `candidates` (autojunk enabled).
pub fn best_match(
    primary: &str,
    candidates: &[String],
) -> BestMatch
{
    BestMatchFinder::new(candidates, true).find(primary)
}
