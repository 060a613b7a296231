use crate::path::{DefaultEditComparator, EditStep, MinimumEditPath, StepOperation};
use log::debug;
use regex::Regex;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ignore pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Describes edit steps between an expected and an actual text, with 1-based line
/// positions.
pub trait ToReport {
    fn to_report(&self, expected_name: &str, actual_name: &str) -> String;
}

impl<T: Display> ToReport for EditStep<T> {
    fn to_report(&self, expected_name: &str, actual_name: &str) -> String {
        let from_line = self.from_index.unwrap_or(0) + 1;
        let to_line = self.to_index.unwrap_or(0) + 1;
        let from = display(&self.from);
        let to = display(&self.to);
        match self.operation {
            StepOperation::None => String::new(),
            StepOperation::Change => format!(
                "\n{}:{}: Expected:\n{}\n{}:{}: Found:\n{}",
                expected_name, from_line, from, actual_name, to_line, to
            ),
            StepOperation::Delete => format!(
                "\n{}:{}: Deleted:\n{}\n{}:{}: Missing",
                expected_name, from_line, from, actual_name, to_line
            ),
            StepOperation::Insert => format!(
                "\n{}:{}: Missing\n{}:{}: Inserted:\n{}",
                expected_name, from_line, actual_name, to_line, to
            ),
        }
    }
}

impl<T: Display> ToReport for [EditStep<T>] {
    fn to_report(&self, expected_name: &str, actual_name: &str) -> String {
        self.iter()
            .map(|step| step.to_report(expected_name, actual_name))
            .collect()
    }
}

fn display<T: Display>(element: &Option<T>) -> String {
    element.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Line-by-line comparison of two texts.
///
/// # Examples
///
/// ```
/// use editpath::report::LineDiff;
///
/// let report = LineDiff::new()
///     .diff("a\nb\nc", "a\nx\nc", "expected.txt", "actual.txt")
///     .unwrap();
/// assert_eq!(
///     report,
///     "\nexpected.txt:2: Expected:\nb\nactual.txt:2: Found:\nx"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LineDiff {
    ignore: Option<Regex>,
    ignore_whitespace: bool,
    change_distance: usize,
    collapse: bool,
}

impl Default for LineDiff {
    fn default() -> Self {
        LineDiff {
            ignore: None,
            ignore_whitespace: false,
            change_distance: 1,
            collapse: false,
        }
    }
}

impl LineDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips differences whose line matches `pattern` in full.
    pub fn ignore(mut self, pattern: &str) -> Result<Self> {
        self.ignore = Some(Regex::new(&format!("^(?:{})$", pattern))?);
        Ok(self)
    }

    /// Treats lines as equal when they only differ in leading or trailing whitespace.
    pub fn ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    /// Cost of replacing a line; inserts and deletes cost 1. At 2 or more a replaced
    /// line is reported as a deletion and an insertion.
    pub fn change_distance(mut self, distance: usize) -> Self {
        self.change_distance = distance;
        self
    }

    /// Collapses adjacent delete/insert pairs into changes before reporting.
    pub fn collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    /// Reports the differences between two texts, or `None` if there are none worth
    /// reporting.
    pub fn diff(
        &self,
        expected: &str,
        actual: &str,
        expected_name: &str,
        actual_name: &str,
    ) -> Option<String> {
        let expected_lines: Vec<String> = expected.lines().map(ToString::to_string).collect();
        let actual_lines: Vec<String> = actual.lines().map(ToString::to_string).collect();

        let comparator = if self.ignore_whitespace {
            DefaultEditComparator::from_equality(|a: &String, b: &String| a.trim() == b.trim())
        } else {
            DefaultEditComparator::new()
        }
        .with_change_distance(self.change_distance);
        let mp = MinimumEditPath::<String, _>::with_comparator(comparator);
        let mut path = mp.minimum_edit_path(&expected_lines, &actual_lines);
        if self.collapse {
            path = mp.collapse(path);
        }

        let report: String = path
            .iter()
            .filter(|step| !step.is_match() && !self.ignored(step))
            .map(|step| step.to_report(expected_name, actual_name))
            .collect();
        debug!(
            "{} ({} lines) vs {} ({} lines): {} steps",
            expected_name,
            expected_lines.len(),
            actual_name,
            actual_lines.len(),
            path.len()
        );
        if report.is_empty() {
            None
        } else {
            Some(report)
        }
    }

    /// Reads and compares two files; the report names them by the paths given.
    pub fn diff_files(&self, expected: &Path, actual: &Path) -> Result<Option<String>> {
        let expected_text = read(expected)?;
        let actual_text = read(actual)?;
        Ok(self.diff(
            &expected_text,
            &actual_text,
            &expected.display().to_string(),
            &actual.display().to_string(),
        ))
    }

    fn ignored(&self, step: &EditStep<String>) -> bool {
        let Some(pattern) = &self.ignore else {
            return false;
        };
        step.from
            .as_ref()
            .or(step.to.as_ref())
            .is_some_and(|line| pattern.is_match(line))
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn step<T>(mut step: EditStep<T>, from_index: usize, to_index: usize) -> EditStep<T> {
        step.set_indices(from_index, to_index);
        step
    }

    #[test]
    fn test_step_reports() {
        assert_eq!(step(EditStep::none("a", "a"), 0, 0).to_report("e", "a"), "");
        assert_eq!(
            step(EditStep::change("b", "x", 1), 1, 1).to_report("exp", "act"),
            "\nexp:2: Expected:\nb\nact:2: Found:\nx"
        );
        assert_eq!(
            step(EditStep::delete("b", 1), 1, 0).to_report("exp", "act"),
            "\nexp:2: Deleted:\nb\nact:1: Missing"
        );
        assert_eq!(
            step(EditStep::insert("z", 1), 2, 3).to_report("exp", "act"),
            "\nexp:3: Missing\nact:4: Inserted:\nz"
        );
    }

    #[test]
    fn test_path_report() {
        let path = vec![
            step(EditStep::delete(1, 1), 0, 0),
            step(EditStep::none(2, 2), 1, 0),
            step(EditStep::insert(3, 1), 1, 1),
        ];
        assert_eq!(
            path.to_report("e", "a"),
            "\ne:1: Deleted:\n1\na:1: Missing\ne:2: Missing\na:2: Inserted:\n3"
        );
    }

    #[test]
    fn test_identical() {
        assert_eq!(LineDiff::new().diff("a\nb\n", "a\r\nb", "e", "a"), None);
        assert_eq!(LineDiff::new().diff("", "", "e", "a"), None);
    }

    #[test]
    fn test_deleted_and_inserted_lines() {
        let report = LineDiff::new().diff("a\nb\nc", "a\nc\nd", "e", "a");
        assert_eq!(
            report,
            Some("\ne:2: Deleted:\nb\na:1: Missing\ne:3: Missing\na:3: Inserted:\nd".to_string())
        );
    }

    #[test]
    fn test_ignore_whitespace() {
        let diff = LineDiff::new().ignore_whitespace(true);
        assert_eq!(diff.diff("a\n  b\nc", "a\nb  \nc", "e", "a"), None);
        assert!(LineDiff::new().diff("a\n  b\nc", "a\nb  \nc", "e", "a").is_some());
    }

    #[test]
    fn test_ignore_pattern() {
        let diff = LineDiff::new().ignore("created: .*").unwrap();
        let expected = "title\ncreated: monday\nbody";
        let actual = "title\ncreated: tuesday\nbody";
        assert_eq!(diff.diff(expected, actual, "e", "a"), None);

        // only full-line matches are ignored
        let diff = LineDiff::new().ignore("created").unwrap();
        assert!(diff.diff(expected, actual, "e", "a").is_some());
    }

    #[test]
    fn test_invalid_pattern() {
        let result = LineDiff::new().ignore("(unclosed");
        assert!(matches!(result, Err(ReportError::Pattern(_))));
    }

    #[test]
    fn test_collapse() {
        // with a costly change, a replaced line comes out as an insert/delete pair
        let expected = "one\ntwo\nthree";
        let actual = "one\n2\nthree";
        let diff = LineDiff::new().change_distance(2);
        let report = diff.diff(expected, actual, "e", "a").unwrap();
        assert_eq!(
            report,
            "\ne:1: Missing\na:2: Inserted:\n2\ne:2: Deleted:\ntwo\na:2: Missing"
        );
        let report = diff.collapse(true).diff(expected, actual, "e", "a").unwrap();
        assert_eq!(report, "\ne:2: Expected:\ntwo\na:2: Found:\n2");
    }

    #[test]
    fn test_diff_files() {
        let mut expected = tempfile::NamedTempFile::new().unwrap();
        let mut actual = tempfile::NamedTempFile::new().unwrap();
        write!(expected, "first\nsecond\n").unwrap();
        write!(actual, "first\nsecond\nthird\n").unwrap();

        let report = LineDiff::new()
            .diff_files(expected.path(), actual.path())
            .unwrap()
            .unwrap();
        assert!(report.ends_with(": Inserted:\nthird"));
        assert!(report.contains(&format!("{}:3: Inserted", actual.path().display())));

        let same = LineDiff::new()
            .diff_files(expected.path(), expected.path())
            .unwrap();
        assert_eq!(same, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let result = LineDiff::new().diff_files(&missing, &missing);
        match result {
            Err(ReportError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected a read error, got {:?}", other),
        }
    }
}
