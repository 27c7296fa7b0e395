//! Filepath: src/infra/walk.rs
//! Corpus scanner: lists candidate documents next to a primary document.
//! - Single directory level, no recursion
//! - Keeps files whose name ends in a recognized extension (case-sensitive)
//! - Drops the primary document by exact filename
//! - Optional extra exclude globs, matched on the filename
//!
//! Order is whatever the directory listing yields; it is NOT sorted.
//! Callers that need a stable order sort the returned names themselves.
//! Filename comparison is byte-exact, so case folding depends on the host
//! filesystem, not on the scanner.
//!
//! Backed by ripgrep's `ignore` crate (with every ignore filter disabled)
//! and `globset`.

use std::ffi::OsStr;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, instrument, warn};

use crate::core::error::CompareError;

/// Lists candidate documents in a corpus directory.
pub struct CorpusScanner
{
    /// Recognized extensions without the leading dot ("txt", "md")
    extensions: Vec<String>,

    /// Compiled set of additional exclude patterns
    exclude: GlobSet,
}

impl CorpusScanner
{
    /// Build a scanner for the given extensions and extra exclude globs.
    pub fn new(
        extensions: &[String],
        exclude: &[String],
    ) -> Result<Self, CompareError>
    {
        let mut builder = GlobSetBuilder::new();

        for pattern in exclude
        {
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|e| {
                    e.trim_start_matches('.')
                        .to_string()
                })
                .collect(),
            exclude: builder.build()?,
        })
    }

    /// True when `name` ends in `.<ext>` for a recognized extension.
    pub fn is_document(
        &self,
        name: &str,
    ) -> bool
    {
        self.extensions
            .iter()
            .any(|ext| {
                name.len() > ext.len()
                    && name.ends_with(ext.as_str())
                    && name[..name.len() - ext.len()].ends_with('.')
            })
    }

    /// Candidate filenames in `dir`, excluding `primary_name`, in listing order.
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn scan(
        &self,
        dir: &Path,
        primary_name: &OsStr,
    ) -> Result<Vec<String>, CompareError>
    {
        let mut b = WalkBuilder::new(dir);

        // Plain listing: no .gitignore, hidden or parent rules
        b.standard_filters(false);
        b.max_depth(Some(1));
        b.follow_links(false);

        let mut out = Vec::new();

        for res in b.build()
        {
            let entry = res.map_err(|source| CompareError::Scan { dir: dir.to_path_buf(), source })?;

            // Depth 0 is the corpus root itself
            if entry.depth() == 0
            {
                continue;
            }

            // Symlinks are kept; a dangling one fails later as a read error
            let is_dir = entry
                .file_type()
                .is_some_and(|ft| ft.is_dir());
            if is_dir
            {
                continue;
            }

            let file_name = entry.file_name();
            if file_name == primary_name
            {
                debug!("skipping primary document");
                continue;
            }

            let Some(name) = file_name.to_str()
            else
            {
                warn!(name = ?file_name, "skipping non UTF-8 filename");
                continue;
            };

            if !self.is_document(name) || self.exclude.is_match(name)
            {
                continue;
            }

            out.push(name.to_string());
        }

        debug!(candidates = out.len(), "scan complete");
        Ok(out)
    }
}
