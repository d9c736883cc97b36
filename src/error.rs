//! Error types for chmsg modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from path filter construction.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid pathspec pattern: {0}")]
    InvalidPathspec(#[source] git2::Error),
}

/// Errors from diff collection.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to resolve HEAD: {0}")]
    HeadResolution(#[source] git2::Error),

    #[error("Failed to compute working tree diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("Failed to render diff text: {0}")]
    PrintFailed(#[source] git2::Error),
}

/// Errors from commit execution.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to read message file {path}: {source}")]
    MessageFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stage changes: {0}")]
    StagingFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),

    #[error("Failed to launch editor: {0}")]
    EditorFailed(#[source] dialoguer::Error),

    #[error("Commit message edit aborted (editor exited without saving)")]
    EditAborted,

    #[error("Aborting commit due to empty commit message")]
    EmptyMessage,
}

/// Errors surfaced by the deriver.
///
/// The deriver introduces no failure modes of its own; everything here is a
/// collaborator error passed through transparently.
#[derive(Error, Debug)]
pub enum DeriveError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}
