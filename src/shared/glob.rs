//! Glob pattern utilities
//!
//! Exclusion patterns from configuration are compiled once into a `GlobSet`
//! and matched against repo-relative paths.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Create a GlobSet from a list of patterns for efficient batch matching.
///
/// Patterns ending in `/` are treated as directories and match everything
/// below them, the way ignore files read.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let processed_pattern = if pattern.ends_with('/') {
            format!("{pattern}**")
        } else {
            pattern.clone()
        };

        let glob = Glob::new(&processed_pattern)
            .with_context(|| format!("Invalid exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_build_globset() -> Result<()> {
        let set = build_globset(&patterns(&["migrations/*.py", "**/generated_*.py"]))?;

        assert!(set.is_match("migrations/0001_initial.py"));
        assert!(set.is_match("pkg/generated_api.py"));
        assert!(!set.is_match("pkg/api.py"));
        Ok(())
    }

    #[test]
    fn test_directory_patterns_match_contents() -> Result<()> {
        let set = build_globset(&patterns(&["vendor/"]))?;

        assert!(set.is_match("vendor/lib/mod.py"));
        assert!(!set.is_match("src/vendor.py"));
        Ok(())
    }

    #[test]
    fn test_empty_pattern_list_matches_nothing() -> Result<()> {
        let set = build_globset(&[])?;
        assert!(!set.is_match("anything.py"));
        Ok(())
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = build_globset(&patterns(&["src/[bad"])).unwrap_err();
        assert!(err.to_string().contains("src/[bad"));
    }
}
