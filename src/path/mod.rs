pub mod comparator;
mod trace;
pub mod types;

pub use comparator::*;
pub use types::*;

use log::debug;
use std::marker::PhantomData;
use std::mem;
use trace::Trace;

/// A delete/insert pair collapses into a change unless the change costs more than this
/// many times the pair.
pub const COLLAPSE_FACTOR: usize = 3;

/// Computes minimum edit paths between sequences, with the
/// [Wagner-Fischer algorithm](https://en.wikipedia.org/wiki/Wagner%E2%80%93Fischer_algorithm).
///
/// Any element type works; the comparator decides what each step costs. A classic
/// Levenshtein distance is `MinimumEditPath<char>` with the default comparator.
///
/// # Examples
///
/// ```
/// use editpath::path::{MinimumEditPath, StepOperation};
///
/// let mp = MinimumEditPath::new();
/// let path = mp.minimum_edit_path(&[1, 2, 3], &[1, 3]);
/// let operations: Vec<StepOperation> = path.iter().map(|s| s.operation).collect();
/// assert_eq!(
///     operations,
///     vec![StepOperation::None, StepOperation::Delete, StepOperation::None]
/// );
/// assert_eq!(mp.minimum_edit_distance(&[1, 2, 3], &[1, 3]), 1);
/// ```
pub struct MinimumEditPath<T, C = DefaultEditComparator<T>> {
    comparator: C,
    element: PhantomData<fn(&T)>,
}

impl<T: PartialEq> MinimumEditPath<T> {
    pub fn new() -> Self {
        Self::with_comparator(DefaultEditComparator::new())
    }
}

impl<T: PartialEq> Default for MinimumEditPath<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> MinimumEditPath<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        MinimumEditPath {
            comparator,
            element: PhantomData,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T: Clone, C: EditComparator<T>> MinimumEditPath<T, C> {
    /// Computes the minimum path from one sequence to another.
    ///
    /// Only two rows of distances are kept while the table is filled, plus the winning
    /// operation of each cell. Steps, and the element clones they own, are built for
    /// the cells of the winning path only.
    ///
    /// # Arguments
    ///
    /// * `from` - The source sequence
    /// * `to` - The destination (final) sequence
    pub fn minimum_edit_path(&self, from: &[T], to: &[T]) -> EditPath<T> {
        let mut trace = Trace::new(from.len(), to.len());

        // first row: the origin, then inserts only
        let mut previous: Vec<usize> = Vec::with_capacity(to.len() + 1);
        previous.push(0);
        trace.push(StepOperation::None);
        for t in to {
            let total = previous[previous.len() - 1].saturating_add(self.comparator.insert_cost(t));
            previous.push(total);
            trace.push(StepOperation::Insert);
        }

        let mut current: Vec<usize> = vec![0; to.len() + 1];
        for f in from {
            // first column: deletes only
            current[0] = previous[0].saturating_add(self.comparator.delete_cost(f));
            trace.push(StepOperation::Delete);

            for (j, t) in to.iter().enumerate() {
                let (operation, total) =
                    self.minimum_edit(previous[j + 1], current[j], previous[j], f, t);
                current[j + 1] = total;
                trace.push(operation);
            }

            mem::swap(&mut previous, &mut current);
        }

        let path = self.rebuild(&trace, from, to);
        debug!(
            "edit path {} -> {}: {} steps from {} cells, distance {}",
            from.len(),
            to.len(),
            path.len(),
            trace.len(),
            path.last().map_or(0, EditStep::total_distance)
        );
        path
    }

    /// Picks the cheapest of the three ways into a cell, returning the winning
    /// operation and the cell's total distance.
    ///
    /// On equal totals a delete beats an insert and an insert beats a change, so raising
    /// the change distance to 2 is enough to favour insert/delete pairs.
    ///
    /// * `left` - total of the cell above in the table (previous row, same column)
    /// * `below` - total of the cell before in the same row
    /// * `diagonal` - total of the previous row, previous column
    fn minimum_edit(
        &self,
        left: usize,
        below: usize,
        diagonal: usize,
        from: &T,
        to: &T,
    ) -> (StepOperation, usize) {
        let delete = left.saturating_add(self.comparator.delete_cost(from));
        let insert = below.saturating_add(self.comparator.insert_cost(to));
        let (operation, distance) = self.comparator.compare_cost(from, to);
        let mut winner = (operation, diagonal.saturating_add(distance));
        if winner.1 >= insert {
            winner = (StepOperation::Insert, insert);
        }
        if winner.1 >= delete {
            winner = (StepOperation::Delete, delete);
        }
        winner
    }

    /// Builds the steps of the winning path, asking the comparator again about the
    /// elements each traced cell consumed.
    fn rebuild(&self, trace: &Trace, from: &[T], to: &[T]) -> EditPath<T> {
        let mut path: EditPath<T> = Vec::new();
        for ((row, column), operation) in trace.backtrack() {
            let step = match operation {
                StepOperation::Delete => self.comparator.delete(&from[row - 1]),
                StepOperation::Insert => self.comparator.insert(&to[column - 1]),
                StepOperation::None | StepOperation::Change => self
                    .comparator
                    .compare(Some(&from[row - 1]), Some(&to[column - 1])),
            };
            let step = match path.last() {
                Some(previous) => step.after(path.len() - 1, previous),
                None => step,
            };
            path.push(step);
        }
        assign_indices(&mut path, from.len(), to.len());
        path
    }

    /// Computes the minimum edit distance between two sequences, 0 if both are empty.
    pub fn minimum_edit_distance(&self, from: &[T], to: &[T]) -> usize {
        self.minimum_edit_path(from, to)
            .last()
            .map_or(0, EditStep::total_distance)
    }

    /// Collapses subsequent delete/insert (or insert/delete) steps into a single change.
    ///
    /// A pair is merged when the comparator's change between the two elements costs at
    /// most `COLLAPSE_FACTOR` times the pair. Only adjacent pairs are considered, in one
    /// pass from left to right, and a merged step is not merged again.
    pub fn collapse(&self, path: EditPath<T>) -> EditPath<T> {
        let mut collapsed: EditPath<T> = Vec::with_capacity(path.len());
        for step in path {
            if let Some(last) = collapsed.last_mut() {
                let pair_distance = last.step_distance.saturating_add(step.step_distance);
                let threshold = COLLAPSE_FACTOR.saturating_mul(pair_distance);
                match (last.operation, step.operation) {
                    (StepOperation::Delete, StepOperation::Insert) => {
                        let change = self.comparator.compare(last.from.as_ref(), step.to.as_ref());
                        if change.step_distance <= threshold {
                            last.operation = StepOperation::Change;
                            last.to = step.to;
                            last.to_index = step.to_index;
                            last.step_distance = pair_distance;
                            continue;
                        }
                        debug!(
                            "not collapsing: change {} delete/insert {}",
                            change.step_distance, pair_distance
                        );
                    }
                    (StepOperation::Insert, StepOperation::Delete) => {
                        let change = self.comparator.compare(step.from.as_ref(), last.to.as_ref());
                        if change.step_distance <= threshold {
                            last.operation = StepOperation::Change;
                            last.from = step.from;
                            last.from_index = step.from_index;
                            last.step_distance = pair_distance;
                            continue;
                        }
                        debug!(
                            "not collapsing: change {} insert/delete {}",
                            change.step_distance, pair_distance
                        );
                    }
                    _ => {}
                }
            }
            collapsed.push(step);
        }
        renumber(&mut collapsed);
        collapsed
    }
}

/// Sets from/to indices walking back from the end of the path.
///
/// Cursors stop at 0, so the leading inserts of a path share from index 0 with the
/// first element (and likewise for leading deletes).
fn assign_indices<T>(path: &mut EditPath<T>, from_len: usize, to_len: usize) {
    let mut f = from_len.saturating_sub(1);
    let mut t = to_len.saturating_sub(1);
    for step in path.iter_mut().rev() {
        step.set_indices(f, t);
        match step.operation {
            StepOperation::Delete => f = f.saturating_sub(1),
            StepOperation::Insert => t = t.saturating_sub(1),
            StepOperation::None | StepOperation::Change => {
                f = f.saturating_sub(1);
                t = t.saturating_sub(1);
            }
        }
    }
    renumber(path);
}

/// Back-traces of a path point at the previous position in the path.
fn renumber<T>(path: &mut EditPath<T>) {
    for (position, step) in path.iter_mut().enumerate() {
        step.back_trace = position.checked_sub(1);
    }
}
