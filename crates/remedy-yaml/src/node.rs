//! Position-annotated YAML tree.

use crate::Position;

/// A YAML node together with its position in the source text.
///
/// The tree is built once per parse and read, never mutated: callers that
/// rewrite a document take positions out of the tree and patch the original
/// text directly, so everything outside the patched spans keeps its exact
/// formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    /// Where this node starts in the source
    pub pos: Position,

    /// Structural shape and content
    pub kind: NodeKind,
}

/// The structural shape of a YAML node, one variant per shape so that
/// shape-handling code can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A single value, holding the scalar's literal text with quoting and
    /// escapes already resolved
    Scalar(String),

    /// An ordered list of nodes
    Sequence(Vec<YamlNode>),

    /// Ordered key/value pairs
    Mapping(Vec<MappingEntry>),
}

/// A key/value pair in a mapping, both sides position-tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
    /// The key node
    pub key: YamlNode,

    /// The value node
    pub value: YamlNode,
}

impl YamlNode {
    /// Check if this is a scalar value.
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, NodeKind::Scalar(_))
    }

    /// Check if this is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, NodeKind::Sequence(_))
    }

    /// Check if this is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, NodeKind::Mapping(_))
    }

    /// Get the scalar text if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Get the elements if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match &self.kind {
            NodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[MappingEntry]> {
        match &self.kind {
            NodeKind::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Get a mapping value by string key.
    ///
    /// Searches the entries in order and returns the value of the first one
    /// whose key is a scalar equal to `key`. Returns None if this is not a
    /// mapping or no entry matches.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        self.as_mapping()?
            .iter()
            .find(|entry| entry.key.as_str() == Some(key))
            .map(|entry| &entry.value)
    }

    /// Number of elements (sequence) or entries (mapping). Zero for scalars.
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Scalar(_) => 0,
            NodeKind::Sequence(items) => items.len(),
            NodeKind::Mapping(entries) => entries.len(),
        }
    }

    /// Check if the node has no elements or entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
