//! Commit options and the git commit backend.

use std::path::PathBuf;

use git2::{ErrorCode, IndexAddOption, Oid, Repository};
use tracing::debug;

use crate::error::CommitError;

/// Options for a commit invocation.
///
/// Named optional fields instead of a dynamic option bag: the deriver mutates
/// `message` and `force_editor` before delegating, and never touches anything
/// the user set explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitOptions {
    /// Explicit commit message. An empty string counts as "not given".
    pub message: Option<String>,
    /// File to read the commit message from.
    pub logfile: Option<PathBuf>,
    /// Open the editor on the message before committing.
    pub force_editor: bool,
}

impl CommitOptions {
    /// Whether the user already supplied a message, which disables derivation.
    pub fn has_explicit_message(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty()) || self.logfile.is_some()
    }
}

/// The underlying commit operation the deriver delegates to.
pub trait Commit {
    fn commit(&self, paths: &[String], options: &CommitOptions) -> Result<Oid, CommitError>;
}

/// Real commit backend over a git repository.
///
/// Stages the requested paths (or everything when no paths are given), writes
/// the index as a tree, and commits on HEAD with the signature from git
/// config. On an unborn branch the commit is created without parents.
pub struct GitBackend<'r> {
    repo: &'r Repository,
    edit: bool,
}

impl<'r> GitBackend<'r> {
    pub fn new(repo: &'r Repository) -> Self {
        Self { repo, edit: true }
    }

    /// Enable or disable editor invocation (disabled for scripting and tests).
    pub fn with_editor(mut self, edit: bool) -> Self {
        self.edit = edit;
        self
    }

    /// Resolve the effective commit message from the options.
    ///
    /// A message file beats an inline message; `force_editor` opens the
    /// user's editor pre-filled with whatever was resolved so far.
    fn resolve_message(&self, options: &CommitOptions) -> Result<String, CommitError> {
        let mut message = match &options.logfile {
            Some(path) => std::fs::read_to_string(path).map_err(|source| {
                CommitError::MessageFileUnreadable {
                    path: path.clone(),
                    source,
                }
            })?,
            None => options.message.clone().unwrap_or_default(),
        };

        if options.force_editor && self.edit {
            message = edit_in_editor(&message)?;
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(CommitError::EmptyMessage);
        }
        Ok(message.to_string())
    }
}

impl Commit for GitBackend<'_> {
    fn commit(&self, paths: &[String], options: &CommitOptions) -> Result<Oid, CommitError> {
        let message = self.resolve_message(options)?;

        // Stage the requested paths, or everything like `git add -A`.
        let mut index = self.repo.index().map_err(CommitError::StagingFailed)?;
        if paths.is_empty() {
            index
                .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
                .map_err(CommitError::StagingFailed)?;
        } else {
            index
                .add_all(paths.iter(), IndexAddOption::DEFAULT, None)
                .map_err(CommitError::StagingFailed)?;
        }
        index.write().map_err(CommitError::StagingFailed)?;

        let tree_id = index.write_tree().map_err(CommitError::StagingFailed)?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .map_err(CommitError::CommitFailed)?;

        let sig = self.repo.signature().map_err(CommitError::ConfigError)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit().map_err(CommitError::CommitFailed)?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(CommitError::CommitFailed(e)),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, &message, &tree, &parents)
            .map_err(CommitError::CommitFailed)?;

        debug!("Created commit {oid}");
        Ok(oid)
    }
}

/// Open the user's editor pre-filled with the message.
fn edit_in_editor(initial: &str) -> Result<String, CommitError> {
    match dialoguer::Editor::new().require_save(true).edit(initial) {
        Ok(Some(edited)) => Ok(edited),
        Ok(None) => Err(CommitError::EditAborted),
        Err(e) => Err(CommitError::EditorFailed(e)),
    }
}
