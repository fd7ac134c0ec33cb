//! Source positions for YAML nodes.

use serde::{Deserialize, Serialize};

/// Position of a node in the source text.
///
/// Lines and columns are 1-based. Columns count characters, not bytes, so a
/// caller slicing a line at a column must resolve the byte boundary itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Character index from the start of the input (0-based)
    pub offset: usize,

    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based, in characters)
    pub col: usize,
}

impl Position {
    /// Create a Position from a yaml-rust2 Marker.
    ///
    /// The scanner reports 1-based lines but 0-based columns; the column is
    /// shifted here so both coordinates share the same base.
    pub fn from_marker(marker: &yaml_rust2::scanner::Marker) -> Self {
        Self {
            offset: marker.index(),
            line: marker.line(),
            col: marker.col() + 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}
