use std::fmt;

/// Alias for a vector of EditStep
/// Result of `MinimumEditPath::minimum_edit_path`
pub type EditPath<T> = Vec<EditStep<T>>;

/// Glyph standing in for the missing side of an insert or delete.
pub const PLACEHOLDER: char = '·';

/// Each step in an edit path can be
/// a match (None)
/// a substitution (Change)
/// new (Insert)
/// removed (Delete)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOperation {
    None,
    Change,
    Insert,
    Delete,
}

impl fmt::Display for StepOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepOperation::None => "NONE",
            StepOperation::Change => "CHANGE",
            StepOperation::Insert => "INSERT",
            StepOperation::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A single step in editing one sequence into another.
///
/// `back_trace` is the position of the preceding step in its path.
/// `from_index` and `to_index` stay `None` until path extraction assigns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStep<T> {
    pub from: Option<T>,
    pub to: Option<T>,
    pub operation: StepOperation,
    pub step_distance: usize,
    pub back_trace: Option<usize>,
    pub from_index: Option<usize>,
    pub to_index: Option<usize>,
    back_trace_distance: usize,
}

impl<T> EditStep<T> {
    pub fn new(
        from: Option<T>,
        to: Option<T>,
        step_distance: usize,
        operation: StepOperation,
    ) -> Self {
        EditStep {
            from,
            to,
            operation,
            step_distance,
            back_trace: None,
            from_index: None,
            to_index: None,
            back_trace_distance: 0,
        }
    }

    pub fn none(from: T, to: T) -> Self {
        Self::new(Some(from), Some(to), 0, StepOperation::None)
    }

    pub fn change(from: T, to: T, step_distance: usize) -> Self {
        Self::new(Some(from), Some(to), step_distance, StepOperation::Change)
    }

    pub fn insert(to: T, step_distance: usize) -> Self {
        Self::new(None, Some(to), step_distance, StepOperation::Insert)
    }

    pub fn delete(from: T, step_distance: usize) -> Self {
        Self::new(Some(from), None, step_distance, StepOperation::Delete)
    }

    /// Chains this step after `previous`, which sits at `position`.
    ///
    /// The total distance of `previous` is cached here, so `total_distance` never
    /// has to walk the chain.
    pub fn after(mut self, position: usize, previous: &EditStep<T>) -> Self {
        self.back_trace = Some(position);
        self.back_trace_distance = previous.total_distance();
        self
    }

    /// The total distance up to and including this step, saturating at `usize::MAX`.
    pub fn total_distance(&self) -> usize {
        self.back_trace_distance.saturating_add(self.step_distance)
    }

    pub fn set_indices(&mut self, from_index: usize, to_index: usize) {
        self.from_index = Some(from_index);
        self.to_index = Some(to_index);
    }

    pub fn is_match(&self) -> bool {
        self.operation == StepOperation::None
    }
}

impl<T: fmt::Display> fmt::Display for EditStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.operation)?;
        match &self.from {
            Some(from) => write!(f, "{}", from)?,
            None if self.operation == StepOperation::Insert => write!(f, "{}", PLACEHOLDER)?,
            None => f.write_str("<null>")?,
        }
        f.write_str("\t→\t")?;
        match &self.to {
            Some(to) => write!(f, "{}", to),
            None if self.operation == StepOperation::Delete => write!(f, "{}", PLACEHOLDER),
            None => f.write_str("<null>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let step: EditStep<i32> = EditStep::new(None, None, 0, StepOperation::None);
        assert_eq!(step.from, None);
        assert_eq!(step.to, None);
        assert_eq!(step.step_distance, 0);
        assert_eq!(step.back_trace, None);
        assert_eq!(step.from_index, None);
        assert_eq!(step.to_index, None);

        let step1 = EditStep::none(1, 1);
        let step2 = EditStep::change(2, -2, 1).after(0, &step1);
        assert_eq!(step2.from, Some(2));
        assert_eq!(step2.to, Some(-2));
        assert_eq!(step2.operation, StepOperation::Change);
        assert_eq!(step2.back_trace, Some(0));

        // a change with no distance is allowed
        let step3 = EditStep::change(3, 33, 0).after(1, &step2);
        assert_eq!(step3.step_distance, 0);
        assert_eq!(step3.operation, StepOperation::Change);

        let step4 = EditStep::delete(4, 50).after(2, &step3);
        assert_eq!(step4.from, Some(4));
        assert_eq!(step4.to, None);
        assert_eq!(step4.operation, StepOperation::Delete);

        let step5 = EditStep::insert(5, 25).after(3, &step4);
        assert_eq!(step5.from, None);
        assert_eq!(step5.to, Some(5));
        assert_eq!(step5.operation, StepOperation::Insert);
        assert_eq!(step5.back_trace, Some(3));
    }

    #[test]
    fn test_step_vs_total_distance() {
        let step1 = EditStep::none(1, 1);
        let step2 = EditStep::change(2, -2, 0).after(0, &step1);
        let step3 = EditStep::change(3, 33, 100).after(1, &step2);
        let step4 = EditStep::delete(4, 50).after(2, &step3);
        let step5 = EditStep::insert(5, 25).after(3, &step4);
        let step6 = EditStep::none(6, 6).after(4, &step5);

        assert_eq!((step1.step_distance, step1.total_distance()), (0, 0));
        assert_eq!((step2.step_distance, step2.total_distance()), (0, 0));
        assert_eq!((step3.step_distance, step3.total_distance()), (100, 100));
        assert_eq!((step4.step_distance, step4.total_distance()), (50, 150));
        assert_eq!((step5.step_distance, step5.total_distance()), (25, 175));
        assert_eq!((step6.step_distance, step6.total_distance()), (0, 175));
    }

    #[test]
    fn test_total_distance_saturates() {
        let first = EditStep::delete('a', usize::MAX - 1);
        let second = EditStep::insert('b', 5).after(0, &first);
        assert_eq!(second.total_distance(), usize::MAX);
        let third = EditStep::none('c', 'c').after(1, &second);
        assert_eq!(third.total_distance(), usize::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(EditStep::change('a', 'b', 1).to_string(), "CHANGE\ta\t→\tb");
        assert_eq!(EditStep::insert('b', 1).to_string(), "INSERT\t·\t→\tb");
        assert_eq!(EditStep::delete('a', 1).to_string(), "DELETE\ta\t→\t·");
        let odd: EditStep<char> = EditStep::new(None, Some('x'), 1, StepOperation::Change);
        assert_eq!(odd.to_string(), "CHANGE\t<null>\t→\tx");
    }
}
