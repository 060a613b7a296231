use crate::path::{EditComparator, EditPath, EditStep, MinimumEditPath, PLACEHOLDER};

impl<C: EditComparator<char>> MinimumEditPath<char, C> {
    /// Computes the minimum edit path between two strings, as sequences of `char`.
    pub fn minimum_edit_path_str(&self, from: &str, to: &str) -> EditPath<char> {
        let from: Vec<char> = from.chars().collect();
        let to: Vec<char> = to.chars().collect();
        self.minimum_edit_path(&from, &to)
    }

    pub fn minimum_edit_distance_str(&self, from: &str, to: &str) -> usize {
        self.minimum_edit_path_str(from, to)
            .last()
            .map_or(0, EditStep::total_distance)
    }

    /// Same as `minimum_edit_distance_str`.
    pub fn levenshtein_distance(&self, from: &str, to: &str) -> usize {
        self.minimum_edit_distance_str(from, to)
    }
}

/// Computes the Levenshtein distance between two strings, where an insertion, a
/// deletion, or a substitution each cost 1.
///
/// # Examples
///
/// ```
/// use editpath::strings::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(from: &str, to: &str) -> usize {
    MinimumEditPath::<char>::new().levenshtein_distance(from, to)
}

/// Renders a path as the `from` string over the `to` string, vertically aligned.
///
/// Inserts and deletes leave a `·` gap on the side that lacks the character. Each
/// line starts with `\r\n`, and the output ends with one, so the alignment survives
/// whatever the output is embedded in.
///
/// # Examples
///
/// ```
/// use editpath::path::MinimumEditPath;
/// use editpath::strings::print_path;
///
/// let path = MinimumEditPath::<char>::new().minimum_edit_path_str("kitten", "sitting");
/// assert_eq!(print_path(&path), "\r\nkitten·\r\nsitting\r\n");
/// ```
pub fn print_path(path: &[EditStep<char>]) -> String {
    let mut from = String::from("\r\n");
    let mut to = String::from("\r\n");
    for step in path {
        from.push(step.from.unwrap_or(PLACEHOLDER));
        to.push(step.to.unwrap_or(PLACEHOLDER));
    }
    from.push_str(&to);
    from.push_str("\r\n");
    from
}
