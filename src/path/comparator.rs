use crate::path::types::*;
use std::fmt;

/// Assigns costs to the steps an edit path is made of.
///
/// `compare` may be given an absent element on either side; the engine only does so
/// through `collapse`, since the table fill routes absences to `insert` and `delete`.
///
/// The table fill only asks for costs, through the `*_cost` methods, and builds steps
/// for the cells of the winning path afterwards. Both must agree, so a comparator has
/// to answer the same way every time it is asked about the same elements. The
/// provided cost methods build a step and keep its distance; implementations whose
/// steps are expensive to build should override them.
pub trait EditComparator<T> {
    /// A `None` or `Change` step between two elements.
    fn compare(&self, from: Option<&T>, to: Option<&T>) -> EditStep<T>;

    /// A `Delete` step for an element of the source sequence.
    fn delete(&self, from: &T) -> EditStep<T>;

    /// An `Insert` step for an element of the destination sequence.
    fn insert(&self, to: &T) -> EditStep<T>;

    /// Operation and distance of `compare` on two present elements.
    fn compare_cost(&self, from: &T, to: &T) -> (StepOperation, usize) {
        let step = self.compare(Some(from), Some(to));
        (step.operation, step.step_distance)
    }

    fn delete_cost(&self, from: &T) -> usize {
        self.delete(from).step_distance
    }

    fn insert_cost(&self, to: &T) -> usize {
        self.insert(to).step_distance
    }
}

type Equality<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Comparator giving any unequal pair the same change distance.
///
/// Distances all default to 1 and equality defaults to `PartialEq`.
///
/// # Examples
///
/// ```
/// use editpath::path::{DefaultEditComparator, EditComparator, StepOperation};
///
/// let comparator = DefaultEditComparator::from_equality(|a: &String, b: &String| {
///     a.eq_ignore_ascii_case(b)
/// })
/// .with_change_distance(2);
/// let step = comparator.compare(Some(&"Hello".to_string()), Some(&"hello".to_string()));
/// assert_eq!(step.operation, StepOperation::None);
/// assert_eq!(comparator.change_distance(), 2);
/// ```
pub struct DefaultEditComparator<T> {
    change_distance: usize,
    insert_distance: usize,
    delete_distance: usize,
    equals: Equality<T>,
}

impl<T: PartialEq> DefaultEditComparator<T> {
    pub fn new() -> Self {
        Self::from_equality(|a: &T, b: &T| a == b)
    }

    /// The same distance for an insert, a delete, or a change.
    pub fn uniform(distance: usize) -> Self {
        Self::new().with_distances(distance, distance, distance)
    }
}

impl<T: PartialEq> Default for DefaultEditComparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DefaultEditComparator<T> {
    pub fn from_equality<F>(equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        DefaultEditComparator {
            change_distance: 1,
            insert_distance: 1,
            delete_distance: 1,
            equals: Box::new(equals),
        }
    }

    pub fn with_equality<F>(mut self, equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.equals = Box::new(equals);
        self
    }

    pub fn with_distances(mut self, insert: usize, delete: usize, change: usize) -> Self {
        self.insert_distance = insert;
        self.delete_distance = delete;
        self.change_distance = change;
        self
    }

    pub fn with_change_distance(mut self, distance: usize) -> Self {
        self.change_distance = distance;
        self
    }

    pub fn with_insert_distance(mut self, distance: usize) -> Self {
        self.insert_distance = distance;
        self
    }

    pub fn with_delete_distance(mut self, distance: usize) -> Self {
        self.delete_distance = distance;
        self
    }

    pub fn change_distance(&self) -> usize {
        self.change_distance
    }

    pub fn insert_distance(&self) -> usize {
        self.insert_distance
    }

    pub fn delete_distance(&self) -> usize {
        self.delete_distance
    }
}

impl<T: Clone> EditComparator<T> for DefaultEditComparator<T> {
    fn compare(&self, from: Option<&T>, to: Option<&T>) -> EditStep<T> {
        let equal = match (from, to) {
            (Some(f), Some(t)) => (self.equals)(f, t),
            (None, None) => true,
            _ => false,
        };
        let (distance, operation) = if equal {
            (0, StepOperation::None)
        } else {
            (self.change_distance, StepOperation::Change)
        };
        EditStep::new(from.cloned(), to.cloned(), distance, operation)
    }

    fn delete(&self, from: &T) -> EditStep<T> {
        EditStep::delete(from.clone(), self.delete_distance)
    }

    fn insert(&self, to: &T) -> EditStep<T> {
        EditStep::insert(to.clone(), self.insert_distance)
    }

    fn compare_cost(&self, from: &T, to: &T) -> (StepOperation, usize) {
        if (self.equals)(from, to) {
            (StepOperation::None, 0)
        } else {
            (StepOperation::Change, self.change_distance)
        }
    }

    fn delete_cost(&self, _from: &T) -> usize {
        self.delete_distance
    }

    fn insert_cost(&self, _to: &T) -> usize {
        self.insert_distance
    }
}

impl<T> fmt::Debug for DefaultEditComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultEditComparator")
            .field("change_distance", &self.change_distance)
            .field("insert_distance", &self.insert_distance)
            .field("delete_distance", &self.delete_distance)
            .finish_non_exhaustive()
    }
}
