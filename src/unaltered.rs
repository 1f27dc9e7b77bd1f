//! Unaltered path matching.
//! A template unit may list regular expressions for source paths that are
//! copied byte for byte instead of being rendered.

use crate::error::Result;
use log::debug;
use regex::{Regex, RegexSet};
use std::path::Path;

/// Compiled set of unaltered patterns for one template unit.
#[derive(Debug, Clone)]
pub struct UnalteredMatcher {
    patterns: RegexSet,
}

impl UnalteredMatcher {
    /// Compiles the patterns of a unit.
    ///
    /// Every pattern is anchored at the start of the path, so a pattern
    /// matches when it matches a prefix of the source path. Each pattern must
    /// be valid on its own, so unbalanced groups cannot escape the anchor.
    ///
    /// # Errors
    /// * `Error::UnalteredPatternError` if a pattern is not a valid regex
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            Regex::new(pattern.as_ref())?;
        }
        let anchored = patterns.iter().map(|p| format!("^(?:{})", p.as_ref()));
        let patterns = RegexSet::new(anchored)?;
        Ok(Self { patterns })
    }

    /// Returns true if the source file should be copied without rendering.
    pub fn is_unaltered<P: AsRef<Path>>(&self, source: P) -> bool {
        let source = source.as_ref().to_string_lossy();
        let unaltered = self.patterns.is_match(&source);
        if unaltered {
            debug!("'{source}' matches an unaltered pattern");
        }
        unaltered
    }
}

impl Default for UnalteredMatcher {
    fn default() -> Self {
        Self { patterns: RegexSet::empty() }
    }
}
