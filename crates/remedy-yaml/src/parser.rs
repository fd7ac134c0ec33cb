//! YAML parser that builds position-annotated trees.

use crate::{Error, MappingEntry, NodeKind, Position, Result, YamlNode};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;

/// Parse YAML from a string, producing a position-annotated tree.
///
/// This parses a single YAML document. If the input contains multiple
/// documents, only the first one is parsed. An input with no document at all
/// (empty text, or comments and blank lines only) yields `Ok(None)`.
///
/// Scalar nodes keep their literal text with quoting and escapes resolved;
/// aliases are not resolved and surface as empty scalars.
///
/// # Example
///
/// ```rust
/// use remedy_yaml::parse;
///
/// let doc = parse("title: My Document").unwrap().unwrap();
/// assert!(doc.is_mapping());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the input is not valid YAML.
pub fn parse(content: &str) -> Result<Option<YamlNode>> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::default();

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(Error::from)?;

    Ok(builder.root)
}

/// Builder that implements MarkedEventReceiver to construct the tree.
///
/// Containers live on a stack while their children arrive; a finished node is
/// attached to the container below it, or becomes the root when the stack is
/// empty.
#[derive(Default)]
struct TreeBuilder {
    /// Stack of containers being constructed
    stack: Vec<Frame>,

    /// The completed root node
    root: Option<YamlNode>,
}

/// A container being constructed during parsing.
enum Frame {
    /// Building a sequence
    Sequence {
        pos: Position,
        items: Vec<YamlNode>,
    },

    /// Building a mapping; `pending_key` holds a key waiting for its value
    Mapping {
        pos: Position,
        entries: Vec<MappingEntry>,
        pending_key: Option<YamlNode>,
    },
}

impl TreeBuilder {
    fn push_complete(&mut self, node: YamlNode) {
        match self.stack.last_mut() {
            None => {
                // This is the root
                self.root = Some(node);
            }
            Some(Frame::Sequence { items, .. }) => {
                items.push(node);
            }
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                None => *pending_key = Some(node),
                Some(key) => entries.push(MappingEntry { key, value: node }),
            },
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Nothing => {}

            Event::StreamStart => {}
            Event::StreamEnd => {}
            Event::DocumentStart => {}
            Event::DocumentEnd => {}

            Event::Scalar(value, _style, _anchor_id, _tag) => {
                self.push_complete(YamlNode {
                    pos: Position::from_marker(&marker),
                    kind: NodeKind::Scalar(value),
                });
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(Frame::Sequence {
                    pos: Position::from_marker(&marker),
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                let frame = self.stack.pop().expect("SequenceEnd without SequenceStart");

                match frame {
                    Frame::Sequence { pos, items } => self.push_complete(YamlNode {
                        pos,
                        kind: NodeKind::Sequence(items),
                    }),
                    Frame::Mapping { .. } => panic!("expected a sequence frame"),
                }
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(Frame::Mapping {
                    pos: Position::from_marker(&marker),
                    entries: Vec::new(),
                    pending_key: None,
                });
            }

            Event::MappingEnd => {
                let frame = self.stack.pop().expect("MappingEnd without MappingStart");

                match frame {
                    Frame::Mapping { pos, entries, .. } => self.push_complete(YamlNode {
                        pos,
                        kind: NodeKind::Mapping(entries),
                    }),
                    Frame::Sequence { .. } => panic!("expected a mapping frame"),
                }
            }

            Event::Alias(_anchor_id) => {
                // Aliases are not resolved; they surface as empty scalars.
                self.push_complete(YamlNode {
                    pos: Position::from_marker(&marker),
                    kind: NodeKind::Scalar(String::new()),
                });
            }
        }
    }
}
