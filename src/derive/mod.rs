//! The commit-message deriver.
//!
//! Sits between "user invokes commit" and "commit is recorded": when no
//! explicit message was given and the changelog file is part of the pending
//! change, the deriver reads the changelog's added lines from the diff,
//! joins them into a message, and delegates to the underlying commit with
//! the editor forced open for review. In every other case the call passes
//! through unchanged.

pub mod extract;

use git2::Oid;
use tracing::debug;

use crate::commit::{Commit, CommitOptions};
use crate::config::{ConfigLookup, changelog_filename};
use crate::diff::DiffSource;
use crate::error::DeriveError;
use crate::filter::PathFilter;

pub use extract::{added_lines, join_entries};

/// Outcome of a derivation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// Preconditions not met; delegate with the options untouched.
    Passthrough,
    /// Derived message text (possibly empty) to commit with a forced editor.
    Message(String),
}

/// Derives commit messages from changelog additions.
///
/// Collaborators are injected so the derivation logic stays a pure function
/// of diff content and configuration.
pub struct Deriver<'a> {
    diff: &'a dyn DiffSource,
    config: &'a dyn ConfigLookup,
}

impl<'a> Deriver<'a> {
    pub fn new(diff: &'a dyn DiffSource, config: &'a dyn ConfigLookup) -> Self {
        Self { diff, config }
    }

    /// Decide whether to derive a message for this invocation.
    ///
    /// Returns [`Derivation::Passthrough`] when the user already supplied a
    /// message, or when a non-empty path selection excludes the changelog.
    /// Otherwise diffs the changelog alone and extracts its added lines.
    pub fn derive(
        &self,
        paths: &[String],
        options: &CommitOptions,
    ) -> Result<Derivation, DeriveError> {
        if options.has_explicit_message() {
            debug!("Explicit message given, not deriving");
            return Ok(Derivation::Passthrough);
        }

        let logname = changelog_filename(self.config);

        if !paths.is_empty() {
            let selection = PathFilter::new(paths)?;
            if !selection.is_selected(&logname) {
                debug!("Changelog {logname} not in the committed paths, not deriving");
                return Ok(Derivation::Passthrough);
            }
        }

        let logfilter = PathFilter::new(std::slice::from_ref(&logname))?;
        let chunks = self.diff.diff(&logfilter)?;

        let lines = added_lines(&chunks);
        debug!("Derived {} line(s) from {logname}", lines.len());
        Ok(Derivation::Message(join_entries(&lines)))
    }

    /// Run the full interception: derive, mutate the options, delegate.
    ///
    /// On passthrough the options reach `next` exactly as given. On a derived
    /// message (even an empty one) the editor is forced so the user reviews
    /// the text before it is finalized. Collaborator errors propagate
    /// unchanged.
    pub fn commit(
        &self,
        next: &dyn Commit,
        paths: &[String],
        options: &CommitOptions,
    ) -> Result<Oid, DeriveError> {
        match self.derive(paths, options)? {
            Derivation::Passthrough => Ok(next.commit(paths, options)?),
            Derivation::Message(log) => {
                let mut options = options.clone();
                options.force_editor = true;
                options.message = Some(log);
                Ok(next.commit(paths, &options)?)
            }
        }
    }
}
