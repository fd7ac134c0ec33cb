//! # remedy-yaml
//!
//! YAML parsing with source position tracking.
//!
//! This crate provides `YamlNode`, a YAML tree in which every node carries
//! the line, column, and character offset where it starts in the original
//! text. This is the foundation for format-preserving rewrites: a caller
//! locates the nodes it cares about, takes their positions, and patches the
//! original text directly instead of re-serializing the tree.
//!
//! ## Design
//!
//! Nodes hold only what a position-driven rewrite needs: the structural
//! shape as an explicit enum (scalar, sequence, mapping) and, for scalars,
//! the literal text. There is no scalar type inference and no per-node
//! value duplication; a document that merely needs to be *read* as typed
//! data is better served by a plain YAML crate.
//!
//! ## Example
//!
//! ```rust
//! use remedy_yaml::parse;
//!
//! let doc = parse("jobs:\n  build:\n    runs-on: ubuntu-latest\n")
//!     .unwrap()
//!     .unwrap();
//!
//! let runs_on = doc
//!     .get("jobs")
//!     .and_then(|jobs| jobs.get("build"))
//!     .and_then(|build| build.get("runs-on"))
//!     .unwrap();
//!
//! assert_eq!(runs_on.as_str(), Some("ubuntu-latest"));
//! assert_eq!(runs_on.pos.line, 3);
//! assert_eq!(runs_on.pos.col, 14);
//! ```

mod error;
mod node;
mod parser;
mod position;

pub use error::{Error, Result};
pub use node::{MappingEntry, NodeKind, YamlNode};
pub use parser::parse;
pub use position::Position;
