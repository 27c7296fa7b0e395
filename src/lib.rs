//! **docmatch** - Fast CLI for finding the best-matching paragraphs of a document across a corpus
//!
//! Scores every paragraph of a primary document against each candidate document in a
//! directory using a sequence-alignment ratio, or scores whole documents at once, and
//! classifies every score into a review tier.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core engine - scoring, best-match selection, tiers and comparison runs
pub mod core {
    /// Sequence-alignment similarity ratio
    pub mod similarity;
    pub use similarity::{SequenceMatcher, ratio};

    /// Per-paragraph best-match selection
    pub mod best_match;
    pub use best_match::{BestMatch, BestMatchFinder};

    /// Whole-document comparison
    pub mod whole;

    /// Score tiers
    pub mod tier;
    pub use tier::Tier;

    /// Result entries and the per-run aggregator
    pub mod results;
    pub use results::{MatchResult, ResultAggregator, ResultEntry, WholeDocumentResult};

    /// Error taxonomy
    pub mod error;
    pub use error::CompareError;

    /// Comparison runs over a corpus, parallel across documents
    pub mod engine;
    pub use engine::{CompareOptions, ComparisonRequest, Mode, Session, compare};

    /// `compare` command handler
    pub mod compare;
    pub use compare::run as compare_run;
}

/// CLI output helpers
pub mod cli_ext {
    /// Table and JSON rendering of comparison results
    pub mod report;
}

/// Infrastructure - Configuration, I/O, paragraph sources and corpus scanning
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Memory-mapped file I/O for large documents (>1MB threshold)
    pub mod io;

    /// Paragraph extraction seam and the plain-text adapter
    pub mod source;
    pub use source::{ParagraphSource, TextFileSource};

    /// Single-level corpus directory scanning
    pub mod walk;
    pub use walk::CorpusScanner;

    /// Utility functions and helpers for common operations
    pub mod utils;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use crate::core::compare_run;
pub use infra::{Config, load_config};

// Core types for external consumers
pub use crate::core::{
    CompareError, CompareOptions, ComparisonRequest, MatchResult, Mode, ResultAggregator,
    ResultEntry, Session, Tier, WholeDocumentResult, compare,
};
