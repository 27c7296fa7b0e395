//! Filepath: src/infra/utils.rs
//! Small path helpers for user-supplied arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path helpers
pub struct PathUtils;

impl PathUtils
{
    /// Expand `~` and `$VAR` in a user path; non UTF-8 paths pass through.
    pub fn expand(path: &Path) -> Result<PathBuf>
    {
        let Some(raw) = path.to_str()
        else
        {
            return Ok(path.to_path_buf());
        };

        let expanded =
            shellexpand::full(raw).with_context(|| format!("Failed to expand path {raw}"))?;

        Ok(PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_plain_path_unchanged()
    {
        let p = PathUtils::expand(Path::new("docs/main.txt")).unwrap();
        assert_eq!(p, PathBuf::from("docs/main.txt"));
    }

    #[test]
    fn test_unknown_variable_is_error()
    {
        assert!(PathUtils::expand(Path::new("$DOCMATCH_SURELY_UNSET_VAR/x")).is_err());
    }
}
