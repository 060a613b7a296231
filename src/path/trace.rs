use crate::path::types::StepOperation;

/// Position of a cell in the edit table: `(row, column)`, where row `i` has consumed
/// `i` source elements and column `j` has consumed `j` destination elements.
pub(crate) type Cell = (usize, usize);

/// Winning operation of every cell of the edit table, stored row after row.
///
/// Where a step came from follows from its operation (a delete from the row above,
/// an insert from the cell before, anything else from the diagonal), so one byte per
/// cell is enough to walk the winning path back. Elements and distances are not kept.
pub(crate) struct Trace {
    width: usize,
    operations: Vec<StepOperation>,
}

impl Trace {
    pub(crate) fn new(from_len: usize, to_len: usize) -> Self {
        let width = to_len + 1;
        Trace {
            width,
            operations: Vec::with_capacity((from_len + 1) * width),
        }
    }

    /// Records the winner of the next cell.
    pub(crate) fn push(&mut self, operation: StepOperation) {
        self.operations.push(operation);
    }

    pub(crate) fn len(&self) -> usize {
        self.operations.len()
    }

    /// Walks from the last recorded row's final cell back to the origin, and returns
    /// the cells on the way together with their operation, first to last. The origin
    /// itself is not part of the path.
    pub(crate) fn backtrack(&self) -> Vec<(Cell, StepOperation)> {
        let mut cells = Vec::new();
        let rows = self.operations.len() / self.width;
        if rows == 0 {
            return cells;
        }
        let (mut row, mut column) = (rows - 1, self.width - 1);
        while row > 0 || column > 0 {
            let operation = self.operations[row * self.width + column];
            cells.push(((row, column), operation));
            match operation {
                StepOperation::Delete => row -= 1,
                StepOperation::Insert => column -= 1,
                StepOperation::None | StepOperation::Change => {
                    row -= 1;
                    column -= 1;
                }
            }
        }
        cells.reverse();
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    fn filled(from_len: usize, to_len: usize, interior: StepOperation) -> Trace {
        let mut trace = Trace::new(from_len, to_len);
        for row in 0..=from_len {
            for column in 0..=to_len {
                trace.push(match (row, column) {
                    (0, 0) => StepOperation::None,
                    (0, _) => StepOperation::Insert,
                    (_, 0) => StepOperation::Delete,
                    _ => interior,
                });
            }
        }
        trace
    }

    #[test]
    fn test_one_byte_per_cell() {
        assert_eq!(mem::size_of::<StepOperation>(), 1);
        let trace = filled(300, 200, StepOperation::Change);
        assert_eq!(trace.len(), 301 * 201);
    }

    #[test]
    fn test_backtrack_diagonal() {
        let trace = filled(2, 3, StepOperation::Change);
        assert_eq!(
            trace.backtrack(),
            vec![
                ((0, 1), StepOperation::Insert),
                ((1, 2), StepOperation::Change),
                ((2, 3), StepOperation::Change),
            ]
        );
    }

    #[test]
    fn test_backtrack_edges() {
        let trace = filled(0, 2, StepOperation::None);
        assert_eq!(
            trace.backtrack(),
            vec![((0, 1), StepOperation::Insert), ((0, 2), StepOperation::Insert)]
        );

        let trace = filled(2, 0, StepOperation::None);
        assert_eq!(
            trace.backtrack(),
            vec![((1, 0), StepOperation::Delete), ((2, 0), StepOperation::Delete)]
        );

        assert!(filled(0, 0, StepOperation::None).backtrack().is_empty());
        assert!(Trace::new(3, 3).backtrack().is_empty());
    }
}
