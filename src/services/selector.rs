//! Candidate selection: auto-pick a lone candidate, otherwise ask the user.

use crate::domain::{Candidate, CandidateSet, LanguageClass};
use crate::error::{LauncherError, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Title shown above the selection list
pub const SELECTION_TITLE: &str = "Choose executable to run further:";

/// A row the user confirmed in a [`ListPicker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedRow {
    /// Zero-based position in the displayed list
    pub index: usize,
    /// Display text of the row
    pub text: String,
}

/// Interactive list surface: renders rows, lets the user move up and down,
/// and returns the confirmed row or `None` when the user quits.
pub trait ListPicker {
    fn pick(&mut self, title: &str, rows: &[String]) -> Result<Option<PickedRow>>;
}

/// Flatten a candidate set into display rows and their classes.
///
/// Rows read `"{index}. {path}"` with 1-based indices, classes in discovery
/// order and paths in walk order within a class.
pub fn flatten(candidates: &CandidateSet) -> (Vec<LanguageClass>, Vec<String>) {
    candidates
        .iter()
        .enumerate()
        .map(|(idx, (class, path))| (class, format!("{}. {}", idx + 1, path.display())))
        .unzip()
}

/// Recover the path from a `"{index}. {path}"` row
pub fn parse_row(row: &str) -> Option<PathBuf> {
    static ROW: OnceLock<Regex> = OnceLock::new();
    let re = ROW.get_or_init(|| Regex::new(r"^\d+\. (.*)$").expect("row pattern is valid"));
    re.captures(row)
        .and_then(|caps| caps.get(1))
        .map(|m| PathBuf::from(m.as_str()))
}

/// Choose one candidate from the set.
///
/// A set holding a single class with a single path is returned without
/// touching the picker. `Ok(None)` means the user cancelled.
pub fn select(
    candidates: &CandidateSet,
    picker: &mut dyn ListPicker,
) -> Result<Option<Candidate>> {
    if let Some(candidate) = candidates.single() {
        tracing::debug!("Auto-selecting {:?}", candidate.path);
        return Ok(Some(candidate));
    }
    if candidates.is_empty() {
        return Err(LauncherError::CommandNotFound);
    }

    let (classes, rows) = flatten(candidates);
    let picked = match picker.pick(SELECTION_TITLE, &rows)? {
        Some(picked) => picked,
        None => {
            tracing::info!("Selection cancelled");
            return Ok(None);
        }
    };

    let class = classes
        .get(picked.index)
        .copied()
        .ok_or_else(|| LauncherError::UnexpectedRow(picked.text.clone()))?;
    let path = parse_row(&picked.text).ok_or(LauncherError::UnexpectedRow(picked.text))?;

    Ok(Some(Candidate::new(class, path)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Picker replaying a fixed answer and recording what it was shown
    pub(crate) struct ScriptedPicker {
        answer: Option<usize>,
        text_override: Option<String>,
        pub shown: Option<Vec<String>>,
    }

    impl ScriptedPicker {
        pub(crate) fn choosing(index: usize) -> Self {
            Self {
                answer: Some(index),
                text_override: None,
                shown: None,
            }
        }

        pub(crate) fn cancelling() -> Self {
            Self {
                answer: None,
                text_override: None,
                shown: None,
            }
        }
    }

    impl ListPicker for ScriptedPicker {
        fn pick(&mut self, _title: &str, rows: &[String]) -> Result<Option<PickedRow>> {
            self.shown = Some(rows.to_vec());
            Ok(self.answer.map(|index| PickedRow {
                index,
                text: self
                    .text_override
                    .clone()
                    .unwrap_or_else(|| rows[index].clone()),
            }))
        }
    }

    fn ambiguous_set() -> CandidateSet {
        let mut set = CandidateSet::new();
        set.push(LanguageClass::Go, PathBuf::from("cmd/a/main.go"));
        set.push(LanguageClass::Rust, PathBuf::from("main.rs"));
        set.push(LanguageClass::Go, PathBuf::from("cmd/b/main.go"));
        set
    }

    #[test]
    fn test_flatten_rows() {
        let (classes, rows) = flatten(&ambiguous_set());
        assert_eq!(
            classes,
            vec![LanguageClass::Go, LanguageClass::Go, LanguageClass::Rust]
        );
        insta::assert_debug_snapshot!(rows, @r###"
        [
            "1. cmd/a/main.go",
            "2. cmd/b/main.go",
            "3. main.rs",
        ]
        "###);
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(parse_row("1. main.go"), Some(PathBuf::from("main.go")));
        assert_eq!(
            parse_row("12. dir with spaces/run.sh"),
            Some(PathBuf::from("dir with spaces/run.sh"))
        );
        assert_eq!(parse_row("main.go"), None);
        assert_eq!(parse_row("x. main.go"), None);
    }

    #[test]
    fn test_single_candidate_skips_picker() {
        let mut set = CandidateSet::new();
        set.push(LanguageClass::Go, PathBuf::from("main.go"));

        let mut picker = ScriptedPicker::cancelling();
        let chosen = select(&set, &mut picker).unwrap();
        assert_eq!(chosen, Some(Candidate::new(LanguageClass::Go, "main.go")));
        assert!(picker.shown.is_none());
    }

    #[test]
    fn test_each_index_resolves_its_row() {
        let set = ambiguous_set();
        let expected: Vec<_> = set
            .iter()
            .map(|(class, path)| Candidate::new(class, path))
            .collect();

        for (idx, want) in expected.into_iter().enumerate() {
            let mut picker = ScriptedPicker::choosing(idx);
            assert_eq!(select(&set, &mut picker).unwrap(), Some(want));
            assert_eq!(picker.shown.as_ref().map(Vec::len), Some(3));
        }
    }

    #[test]
    fn test_cancel_is_not_an_error() {
        let mut picker = ScriptedPicker::cancelling();
        assert_eq!(select(&ambiguous_set(), &mut picker).unwrap(), None);
        assert!(picker.shown.is_some());
    }

    #[test]
    fn test_malformed_row_is_surfaced() {
        let mut picker = ScriptedPicker {
            answer: Some(0),
            text_override: Some("garbage".to_string()),
            shown: None,
        };
        let err = select(&ambiguous_set(), &mut picker).unwrap_err();
        assert!(matches!(err, LauncherError::UnexpectedRow(ref row) if row == "garbage"));
        assert_eq!(err.to_string(), "unexpected row data: garbage");
    }

    #[test]
    fn test_empty_set_is_command_not_found() {
        let mut picker = ScriptedPicker::choosing(0);
        let err = select(&CandidateSet::new(), &mut picker).unwrap_err();
        assert!(matches!(err, LauncherError::CommandNotFound));
        assert!(picker.shown.is_none());
    }
}
