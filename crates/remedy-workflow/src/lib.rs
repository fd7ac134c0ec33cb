//! # remedy-workflow
//!
//! Format-preserving remediation passes for GitHub Actions workflows.
//!
//! The crate rewrites specific tokens of a workflow document in place while
//! keeping every other character intact. A naive parse/mutate/re-serialize
//! round trip would reformat the whole file and destroy comments and quoting
//! choices, which is unacceptable for user-owned configuration. Instead,
//! each pass parses the document with [`remedy_yaml`] only to learn node
//! positions, plans its edits as [`Replacement`] descriptors, and patches
//! the raw text line by line.
//!
//! The only pass today is runner label replacement: swapping the labels in
//! each job's `runs-on` field according to a caller-supplied mapping.
//! Hosting tools own file I/O, pass sequencing, and reporting.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use remedy_workflow::replace_runner_labels;
//!
//! let workflow = "jobs:\n  test:\n    runs-on: ubuntu-latest\n";
//! let labels = HashMap::from([
//!     ("ubuntu-latest".to_string(), "hardened-ubuntu-24".to_string()),
//! ]);
//!
//! let (rewritten, changed) = replace_runner_labels(workflow, &labels).unwrap();
//! assert!(changed);
//! assert_eq!(rewritten, "jobs:\n  test:\n    runs-on: hardened-ubuntu-24\n");
//! ```

mod error;
mod patch;
mod runner_label;

pub use error::{Error, Result};
pub use patch::{Replacement, SelectorContext, apply_replacements};
pub use runner_label::{collect_replacements, replace_runner_labels};
