//! Review tiers derived from similarity scores.

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the Medium tier, in percent
pub const MEDIUM_FLOOR: f64 = 30.0;

/// Lower bound (inclusive) of the High tier, in percent
pub const HIGH_FLOOR: f64 = 60.0;

/// Quality bucket of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier
{
    Low,
    Medium,
    High,
}

impl Tier
{
    /// Classify a percentage score: `< 30` Low, `30..60` Medium, `>= 60` High.
    pub fn classify(score: f64) -> Self
    {
        if score < MEDIUM_FLOOR
        {
            Tier::Low
        }
        else if score < HIGH_FLOOR
        {
            Tier::Medium
        }
        else
        {
            Tier::High
        }
    }
}

impl std::fmt::Display for Tier
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result
    {
        match self
        {
            Tier::Low => write!(f, "low"),
            Tier::Medium => write!(f, "medium"),
            Tier::High => write!(f, "high"),
        }
    }
}
