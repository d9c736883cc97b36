//! Path filters built from pathspec patterns.

use std::path::Path;

use git2::{Pathspec, PathspecFlags};

use crate::error::FilterError;

/// A selection of paths described by pathspec patterns.
///
/// Answers membership queries for the deriver: both "did the user's path
/// arguments select the changelog" and the narrow changelog-only scope handed
/// to the diff service. An empty pattern list selects everything, matching
/// the behavior of a commit invoked with no path arguments.
pub struct PathFilter {
    patterns: Vec<String>,
    spec: Option<Pathspec>,
}

impl PathFilter {
    /// Build a filter from pathspec patterns.
    pub fn new(patterns: &[String]) -> Result<Self, FilterError> {
        let spec = if patterns.is_empty() {
            None
        } else {
            Some(Pathspec::new(patterns.iter()).map_err(FilterError::InvalidPathspec)?)
        };
        Ok(Self {
            patterns: patterns.to_vec(),
            spec,
        })
    }

    /// Whether the given path belongs to this filter's selection.
    pub fn is_selected(&self, path: &str) -> bool {
        match &self.spec {
            Some(spec) => spec.matches_path(Path::new(path), PathspecFlags::DEFAULT),
            None => true,
        }
    }

    /// The raw patterns this filter was built from.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
