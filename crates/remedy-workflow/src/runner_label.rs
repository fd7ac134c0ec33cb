//! Runner label replacement for GitHub Actions workflows.
//!
//! Rewrites the labels in each job's `runs-on` field according to a
//! caller-supplied mapping while leaving every other character of the
//! document untouched. The document is parsed only to learn positions; the
//! actual edit happens on the raw text via [`apply_replacements`], so
//! comments, quoting, indentation, and key order all survive.

use std::collections::HashMap;

use remedy_yaml::{NodeKind, YamlNode};

use crate::Result;
use crate::patch::{Replacement, SelectorContext, apply_replacements};

/// Top-level key holding the job collection.
const JOBS_KEY: &str = "jobs";

/// Per-job key selecting the runner.
const RUNS_ON_KEY: &str = "runs-on";

/// Replace runner labels in a workflow document.
///
/// `labels` maps old label text to its replacement, for example
/// `ubuntu-latest` to `hardened-ubuntu-24`. Returns the rewritten document
/// and whether any change was made.
///
/// A document without a `jobs` mapping, a job without `runs-on`, a `runs-on`
/// holding something other than a scalar or sequence (runner groups use a
/// mapping), and a label absent from `labels` are all left alone and
/// reported as unchanged. An empty map short-circuits before parsing, so it
/// succeeds even on input that is not valid YAML.
///
/// # Errors
///
/// Returns an error when the document cannot be parsed. No partial rewrite
/// is ever produced: replacements are collected over the whole document
/// before any text is touched.
pub fn replace_runner_labels(
    input: &str,
    labels: &HashMap<String, String>,
) -> Result<(String, bool)> {
    if labels.is_empty() {
        return Ok((input.to_string(), false));
    }

    let Some(root) = remedy_yaml::parse(input)? else {
        return Ok((input.to_string(), false));
    };

    let replacements = collect_replacements(&root, labels);
    if replacements.is_empty() {
        return Ok((input.to_string(), false));
    }

    tracing::debug!(count = replacements.len(), "replacing runner labels");
    Ok(apply_replacements(input, &replacements))
}

/// Collect one replacement descriptor per eligible label, in document order.
///
/// Jobs are visited as they appear in the `jobs` mapping; within a
/// list-valued `runs-on`, elements are visited in order. Parser positions
/// are 1-based and are converted here to the 0-based line and column the
/// patcher consumes.
pub fn collect_replacements(
    root: &YamlNode,
    labels: &HashMap<String, String>,
) -> Vec<Replacement> {
    let mut replacements = Vec::new();

    let Some(jobs) = root.get(JOBS_KEY).and_then(YamlNode::as_mapping) else {
        return replacements;
    };

    for job in jobs {
        // A non-scalar job key degrades to an empty name; the name is
        // informational and never drives the patch.
        let job_name = job.key.as_str().unwrap_or_default();
        let Some(runs_on) = job.value.get(RUNS_ON_KEY) else {
            continue;
        };

        match &runs_on.kind {
            NodeKind::Scalar(label) => {
                if let Some(new_label) = labels.get(label) {
                    replacements.push(Replacement {
                        job_name: job_name.to_string(),
                        old_label: label.clone(),
                        new_label: new_label.clone(),
                        line: runs_on.pos.line - 1,
                        column: runs_on.pos.col - 1,
                        context: SelectorContext::Scalar,
                    });
                }
            }
            NodeKind::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    let Some(label) = item.as_str() else {
                        continue;
                    };
                    if let Some(new_label) = labels.get(label) {
                        replacements.push(Replacement {
                            job_name: job_name.to_string(),
                            old_label: label.to_string(),
                            new_label: new_label.clone(),
                            line: item.pos.line - 1,
                            column: item.pos.col - 1,
                            context: SelectorContext::SequenceItem { index },
                        });
                    }
                }
            }
            // Runner groups and other mapping-shaped selectors are out of
            // scope and stay untouched.
            NodeKind::Mapping(_) => {}
        }
    }

    replacements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(old, new)| (old.to_string(), new.to_string()))
            .collect()
    }

    #[test]
    fn test_scalar_runs_on_replaced() {
        let input = "\
name: CI
on: [push]
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
";
        let expected = "\
name: CI
on: [push]
jobs:
  test:
    runs-on: hardened-ubuntu-24
    steps:
      - uses: actions/checkout@v4
";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, expected);
        assert!(changed);
    }

    #[test]
    fn test_block_sequence_replaced() {
        let input = "\
jobs:
  test:
    runs-on:
      - ubuntu-latest
      - self-hosted
";
        let expected = "\
jobs:
  test:
    runs-on:
      - hardened-ubuntu-24
      - self-hosted
";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, expected);
        assert!(changed);
    }

    #[test]
    fn test_inline_sequence_replaced() {
        let input = "\
jobs:
  test:
    runs-on: [ubuntu-latest, windows-latest]
";
        let expected = "\
jobs:
  test:
    runs-on: [hardened-ubuntu-24, hardened-windows-2022]
";
        let map = labels(&[
            ("ubuntu-latest", "hardened-ubuntu-24"),
            ("windows-latest", "hardened-windows-2022"),
        ]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, expected);
        assert!(changed);
    }

    #[test]
    fn test_quoted_label_keeps_quotes() {
        let input = "jobs:\n  test:\n    runs-on: \"ubuntu-latest\"\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, "jobs:\n  test:\n    runs-on: \"hardened-ubuntu-24\"\n");
        assert!(changed);
    }

    #[test]
    fn test_empty_label_map_short_circuits_before_parse() {
        // Not valid YAML, but the empty map never reaches the parser.
        let input = "on: [push";
        let (output, changed) = replace_runner_labels(input, &HashMap::new()).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_missing_jobs_is_noop() {
        let input = "name: Test Workflow\non: [push]\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_jobs_not_a_mapping_is_noop() {
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);

        let scalar_jobs = "jobs: none\n";
        let (output, changed) = replace_runner_labels(scalar_jobs, &map).unwrap();
        assert_eq!(output, scalar_jobs);
        assert!(!changed);

        let sequence_jobs = "jobs:\n  - ubuntu-latest\n";
        let (output, changed) = replace_runner_labels(sequence_jobs, &map).unwrap();
        assert_eq!(output, sequence_jobs);
        assert!(!changed);
    }

    #[test]
    fn test_job_without_runs_on_is_noop() {
        let input = "\
jobs:
  test:
    container: ubuntu:latest
    steps:
      - uses: actions/checkout@v4
";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_runner_group_mapping_untouched() {
        let input = "\
jobs:
  deploy:
    runs-on:
      group: ubuntu-runners
      labels: [ubuntu-latest]
";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_no_matching_labels_is_noop() {
        let input = "jobs:\n  test:\n    runs-on: macos-latest\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_expression_label_untouched() {
        let input = "jobs:\n  test:\n    runs-on: ${{ matrix.os }}\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_comment_only_document_is_noop() {
        let input = "# disabled for now\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, input);
        assert!(!changed);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let input = "name: Test Workflow\non: [push\njobs:\n  test:\n    runs-on: ubuntu-latest\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);
        let err = replace_runner_labels(input, &map).unwrap_err();
        assert!(err.to_string().starts_with("unable to parse yaml:"));
    }

    #[test]
    fn test_idempotent() {
        let input = "jobs:\n  test:\n    runs-on: ubuntu-latest\n";
        let map = labels(&[("ubuntu-latest", "hardened-ubuntu-24")]);

        let (first, changed) = replace_runner_labels(input, &map).unwrap();
        assert!(changed);

        let (second, changed_again) = replace_runner_labels(&first, &map).unwrap();
        assert_eq!(second, first);
        assert!(!changed_again);
    }

    #[test]
    fn test_multiple_jobs_only_matching_ones_change() {
        let input = "\
jobs:
  lint:
    runs-on: ubuntu-22.04
  build:
    runs-on: macos-latest
  test:
    runs-on: ubuntu-latest
";
        let expected = "\
jobs:
  lint:
    runs-on: hardened-ubuntu-22
  build:
    runs-on: macos-latest
  test:
    runs-on: hardened-ubuntu-24
";
        let map = labels(&[
            ("ubuntu-22.04", "hardened-ubuntu-22"),
            ("ubuntu-latest", "hardened-ubuntu-24"),
        ]);
        let (output, changed) = replace_runner_labels(input, &map).unwrap();
        assert_eq!(output, expected);
        assert!(changed);
    }

    #[test]
    fn test_collected_descriptors() {
        let input = "\
jobs:
  build:
    runs-on: ubuntu-latest
  release:
    runs-on: [self-hosted, windows-latest]
";
        let map = labels(&[
            ("ubuntu-latest", "hardened-ubuntu-24"),
            ("windows-latest", "hardened-windows-2022"),
        ]);
        let root = remedy_yaml::parse(input).unwrap().unwrap();
        let replacements = collect_replacements(&root, &map);

        assert_eq!(replacements.len(), 2);

        assert_eq!(replacements[0].job_name, "build");
        assert_eq!(replacements[0].old_label, "ubuntu-latest");
        assert_eq!(replacements[0].new_label, "hardened-ubuntu-24");
        assert_eq!(replacements[0].line, 2);
        assert_eq!(replacements[0].column, 13);
        assert_eq!(replacements[0].context, SelectorContext::Scalar);

        assert_eq!(replacements[1].job_name, "release");
        assert_eq!(replacements[1].old_label, "windows-latest");
        assert_eq!(replacements[1].line, 4);
        assert_eq!(replacements[1].column, 27);
        assert_eq!(
            replacements[1].context,
            SelectorContext::SequenceItem { index: 1 }
        );
    }
}
