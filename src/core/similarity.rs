//! Filepath: src/core/similarity.rs
//! Sequence-alignment similarity ratio over Unicode scalar values.
//!
//! The matcher finds the longest common contiguous run, then recurses into the
//! unmatched left and right segments. The ratio is `2*M / (len(a) + len(b))`
//! where `M` is the total number of matched characters.
//!
//! Tie-break and "autojunk" behaviour follow the classic Ratcliff/Obershelp
//! matcher found in most standard libraries, so scores line up exactly with
//! values produced by other tools using that matcher:
//! - Among runs of equal length, the one starting earliest in `a`, then
//!   earliest in `b`, wins.
//! - When `b` has at least 200 characters, characters occurring more than
//!   `len(b) / 100 + 1` times are "popular" and cannot seed a run (they may
//!   still extend one).
//!
//! The metric is order sensitive and not symmetric: `ratio(a, b)` and
//! `ratio(b, a)` can differ.

use std::collections::HashMap;

/// Inputs shorter than this never trigger the autojunk heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match
{
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Matcher over a pair of strings. `b` is indexed once; `a` may be swapped
/// with [`SequenceMatcher::set_seq1`] to score many strings against one `b`.
#[derive(Debug, Clone)]
pub struct SequenceMatcher
{
    a: Vec<char>,
    b: Vec<char>,

    /// Positions of each non-popular character of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher
{
    /// Build a matcher with the autojunk heuristic enabled.
    pub fn new(
        a: &str,
        b: &str,
    ) -> Self
    {
        Self::with_autojunk(a, b, true)
    }

    pub fn with_autojunk(
        a: &str,
        b: &str,
        autojunk: bool,
    ) -> Self
    {
        let b: Vec<char> = b
            .chars()
            .collect();
        let b2j = index_b(&b, autojunk);

        Self {
            a: a.chars()
                .collect(),
            b,
            b2j,
        }
    }

    /// Replace `a`, keeping the index built for `b`.
    pub fn set_seq1(
        &mut self,
        a: &str,
    )
    {
        self.a = a
            .chars()
            .collect();
    }

    /// Longest matching run in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns the earliest run of maximal length; `size == 0` when nothing matches.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> Match
    {
        let (a, b) = (&self.a, &self.b);

        let mut best_i = alo;
        let mut best_j = blo;
        let mut best_size = 0usize;

        // j2len[j] = length of the run ending at a[i-1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for (i, ch) in a
            .iter()
            .enumerate()
            .take(ahi)
            .skip(alo)
        {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();

            if let Some(positions) = self
                .b2j
                .get(ch)
            {
                for &j in positions
                {
                    if j < blo
                    {
                        continue;
                    }
                    if j >= bhi
                    {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);

                    if k > best_size
                    {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }

            j2len = new_j2len;
        }

        // Popular characters never seed a run, but equal neighbours extend it.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1]
        {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        Match { a_start: best_i, b_start: best_j, size: best_size }
    }

    /// All matching blocks in ascending order, adjacent blocks merged, followed
    /// by a `size == 0` sentinel at `(len(a), len(b))`.
    pub fn matching_blocks(&self) -> Vec<Match>
    {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop()
        {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0
            {
                continue;
            }

            blocks.push(m);
            if alo < m.a_start && blo < m.b_start
            {
                queue.push((alo, m.a_start, blo, m.b_start));
            }
            if m.a_start + m.size < ahi && m.b_start + m.size < bhi
            {
                queue.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
            }
        }

        blocks.sort_by_key(|m| (m.a_start, m.b_start));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks
        {
            let adjacent = merged
                .last()
                .is_some_and(|last| {
                    last.a_start + last.size == m.a_start && last.b_start + last.size == m.b_start
                });

            if !adjacent
            {
                merged.push(m);
            }
            else if let Some(last) = merged.last_mut()
            {
                last.size += m.size;
            }
        }

        merged.push(Match { a_start: la, b_start: lb, size: 0 });
        merged
    }

    /// Similarity in `[0.0, 1.0]`. Two empty strings are identical (1.0).
    pub fn ratio(&self) -> f64
    {
        let total = self.a.len() + self.b.len();
        if total == 0
        {
            return 1.0;
        }

        let matched: usize = self
            .matching_blocks()
            .iter()
            .map(|m| m.size)
            .sum();

        2.0 * matched as f64 / total as f64
    }
}

/// Map every character of `b` to its ascending positions, dropping popular
/// characters when `autojunk` applies.
fn index_b(
    b: &[char],
    autojunk: bool,
) -> HashMap<char, Vec<usize>>
{
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b
        .iter()
        .enumerate()
    {
        b2j.entry(ch)
            .or_default()
            .push(j);
    }

    let n = b.len();
    if autojunk && n >= AUTOJUNK_MIN_LEN
    {
        let ntest = n / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= ntest);
    }

    b2j
}

/// Similarity ratio of `a` against `b` with the autojunk heuristic enabled.
pub fn ratio(
    a: &str,
    b: &str,
) -> f64
{
    SequenceMatcher::new(a, b).ratio()
}

/// Similarity ratio with explicit control over the autojunk heuristic.
pub fn ratio_with(
    a: &str,
    b: &str,
    autojunk: bool,
) -> f64
{
    SequenceMatcher::with_autojunk(a, b, autojunk).ratio()
}

/// Convert a ratio to a percentage rounded to two decimals.
///
/// Fixed-precision formatting rounds the exact binary value with ties to
/// even, so `0.03125` becomes `3.12` and `0.59995` stays below 60.
pub fn to_score(ratio: f64) -> f64
{
    let percent = ratio * 100.0;
    format!("{:.2}", percent)
        .parse()
        .unwrap_or(percent)
}
