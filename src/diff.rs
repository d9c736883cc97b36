//! Diff collection from the working tree using git2.

use git2::{Diff, DiffFormat, DiffOptions, ErrorCode, Repository, Tree};
use std::path::PathBuf;
use tracing::debug;

use crate::error::DiffError;
use crate::filter::PathFilter;

/// One changed file's worth of unified diff text.
///
/// Content lines carry their origin marker (`+`, `-`, space) as the first
/// character; file and hunk header lines are kept verbatim, so the `+++`
/// file header stays distinguishable from added lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChunk {
    pub lines: Vec<String>,
}

/// Source of pending-change diffs, scoped by a path filter.
pub trait DiffSource {
    fn diff(&self, filter: &PathFilter) -> Result<Vec<DiffChunk>, DiffError>;
}

/// Diffs HEAD's tree against the working directory with the index, so
/// staged, unstaged, and untracked changes are all visible.
pub struct WorkingTreeDiff<'r> {
    repo: &'r Repository,
}

impl<'r> WorkingTreeDiff<'r> {
    pub fn new(repo: &'r Repository) -> Self {
        Self { repo }
    }
}

impl DiffSource for WorkingTreeDiff<'_> {
    fn diff(&self, filter: &PathFilter) -> Result<Vec<DiffChunk>, DiffError> {
        let head_tree = resolve_head_tree(self.repo)?;

        let mut opts = DiffOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .show_untracked_content(true);
        for pattern in filter.patterns() {
            opts.pathspec(pattern);
        }

        let diff = self
            .repo
            .diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut opts))
            .map_err(DiffError::DiffFailed)?;

        let chunks = collect_chunks(&diff)?;
        debug!("Collected {} diff chunk(s)", chunks.len());
        Ok(chunks)
    }
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found),
/// `Ok(Some(tree))` for repos with a valid HEAD, or `Err(DiffError::HeadResolution)`
/// for real errors (corrupt HEAD, permission issues, missing objects).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, DiffError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(DiffError::HeadResolution(e)),
    };

    let tree = head_ref
        .peel_to_tree()
        .map_err(DiffError::HeadResolution)?;
    Ok(Some(tree))
}

/// Render a diff into per-file chunks of marked-up text lines.
fn collect_chunks(diff: &Diff<'_>) -> Result<Vec<DiffChunk>, DiffError> {
    let mut chunks: Vec<DiffChunk> = Vec::new();
    let mut current_path: Option<PathBuf> = None;

    diff.print(DiffFormat::Patch, |delta, _hunk, line| {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path())
            .map(PathBuf::from);
        if chunks.is_empty() || path != current_path {
            current_path = path;
            chunks.push(DiffChunk { lines: Vec::new() });
        }
        let chunk = chunks.last_mut().expect("chunk pushed above");

        // Lossy conversion keeps non-UTF-8 lines in the derived message
        // instead of dropping them.
        let content = String::from_utf8_lossy(line.content());
        match line.origin() {
            // Content lines: prepend the origin marker like a textual patch.
            origin @ ('+' | '-' | ' ') => {
                chunk
                    .lines
                    .push(format!("{origin}{}", content.trim_end_matches('\n')));
            }
            // File and hunk headers arrive as whole blocks; keep their lines as-is.
            _ => chunk.lines.extend(content.lines().map(str::to_string)),
        }

        true
    })
    .map_err(DiffError::PrintFailed)?;

    Ok(chunks)
}
