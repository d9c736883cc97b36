//! Added-line extraction from changelog diff chunks.
//!
//! Deliberately naive, for compatibility with the original behavior: every
//! added line in the changelog diff becomes message content, whether or not
//! it looks like a changelog entry.

use crate::diff::DiffChunk;

/// Extract the text of every added line, in encounter order.
///
/// A line qualifies when it starts with the `+` marker and is not the diff's
/// own `+++` file header. The marker is stripped along with surrounding
/// whitespace; blank additions are dropped.
pub fn added_lines(chunks: &[DiffChunk]) -> Vec<String> {
    let mut lines = Vec::new();
    for chunk in chunks {
        for line in &chunk.lines {
            if let Some(rest) = line.strip_prefix('+') {
                if line.starts_with("+++") {
                    continue;
                }
                let text = rest.trim();
                if !text.is_empty() {
                    lines.push(text.to_string());
                }
            }
        }
    }
    lines
}

/// Join extracted lines into a message, trimming leading bullet characters.
///
/// The trim runs once against the start of the joined string, not per line.
pub fn join_entries(lines: &[String]) -> String {
    lines
        .join("\n")
        .trim_start_matches(['*', '-', ' ', '\t'])
        .to_string()
}
