//! Line-level text patching driven by replacement descriptors.
//!
//! The patcher never re-serializes a parsed tree. It splits the original
//! text into physical lines, rewrites only the spans named by the
//! descriptors, and joins the lines back together, so every character
//! outside the patched spans survives byte for byte, including comments,
//! quoting, indentation, and the presence or absence of a trailing newline.

use serde::{Deserialize, Serialize};

/// Whether a runner field held a single scalar or a sequence element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorContext {
    /// `runs-on: label`
    Scalar,

    /// `runs-on: [a, b]` or a block-style list; `index` is the element's
    /// position within the sequence
    SequenceItem { index: usize },
}

/// A single planned label replacement, anchored to an exact source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Name of the job owning the runner field. Informational; patching is
    /// driven purely by line and column.
    pub job_name: String,

    /// Label text to replace
    pub old_label: String,

    /// Replacement label text
    pub new_label: String,

    /// 0-based index into the document's physical lines
    pub line: usize,

    /// 0-based character offset into that line. The label's literal text
    /// starts at or shortly after this column; an opening quote may sit in
    /// between.
    pub column: usize,

    /// Structural shape of the owning field
    pub context: SelectorContext,
}

/// Apply `replacements` to `input`, returning the patched text and whether
/// anything was rewritten.
///
/// Descriptors are applied in the order given, each one patching a single
/// line: the line is split at the recorded column and only the first
/// occurrence of the old label at or after that column is replaced. Scoping
/// the search to the suffix keeps surrounding quotes and trailing comments
/// intact and avoids touching an identical token earlier in the line, such
/// as a key that happens to spell a label.
///
/// A descriptor whose line index falls outside the document is skipped
/// silently; the changed flag stays false unless at least one descriptor
/// made it past that check.
pub fn apply_replacements(input: &str, replacements: &[Replacement]) -> (String, bool) {
    let mut lines: Vec<String> = input.split('\n').map(str::to_string).collect();
    let mut changed = false;

    for r in replacements {
        let Some(line) = lines.get_mut(r.line) else {
            continue;
        };

        // The column counts characters; resolve the byte boundary. A column
        // past the end of the line degrades to an empty suffix.
        let split_at = line
            .char_indices()
            .nth(r.column)
            .map_or(line.len(), |(byte_idx, _)| byte_idx);
        let (prefix, suffix) = line.split_at(split_at);

        let rewritten = format!("{prefix}{}", suffix.replacen(&r.old_label, &r.new_label, 1));
        *line = rewritten;
        changed = true;
    }

    (lines.join("\n"), changed)
}
