//! chmsg - commit with a message derived from new changelog entries.
//!
//! # Overview
//!
//! chmsg intercepts the commit operation: when no explicit message is given
//! and the changelog file (default `CHANGES`) is part of the pending change,
//! it derives a message from the lines added to the changelog, pre-fills the
//! editor with it, and delegates to the real commit. The interception is an
//! explicit decorator over the [`commit::Commit`] trait, composed at startup.

pub mod commit;
pub mod config;
pub mod derive;
pub mod diff;
pub mod error;
pub mod filter;

// Re-export commonly used types
pub use commit::{Commit, CommitOptions, GitBackend};
pub use config::{ConfigLookup, DEFAULT_CHANGELOG, GitConfig, OverlayConfig, changelog_filename};
pub use derive::{Derivation, Deriver};
pub use diff::{DiffChunk, DiffSource, WorkingTreeDiff};
pub use error::{CommitError, DeriveError, DiffError, FilterError};
pub use filter::PathFilter;
