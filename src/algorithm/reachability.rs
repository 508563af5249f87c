//! Subset-sum reachability table and split reconstruction
//!
//! Cell `(y, x)` of the table is set when some selection of the first `x`
//! weights sums to exactly `y`. Row 0 is always fully set, and each later
//! cell follows from the column to its left:
//!
//! `T[y][x] = T[y][x-1] || (w[x-1] <= y && T[y - w[x-1]][x-1])`

use crate::algorithm::bitmatrix::BitMatrix;
use crate::io::error::Result;

/// Which half of the split an input element was assigned to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Element contributes to the target sum
    First,
    /// Element is left out of the target sum
    Second,
}

/// Receives construction events while a table is being filled
///
/// Every method defaults to doing nothing, so observers only implement the
/// events they care about. The table is borrowed, never retained.
pub trait TableObserver {
    /// Called after row `row` of `rows` has been filled
    fn row_completed(&mut self, _row: usize, _rows: usize) {}

    /// Called once the full table is built, before it is inspected
    fn table_completed(&mut self, _table: &BitMatrix) {}
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TableObserver for NoopObserver {}

impl<A, B> TableObserver for (A, B)
where
    A: TableObserver,
    B: TableObserver,
{
    fn row_completed(&mut self, row: usize, rows: usize) {
        self.0.row_completed(row, rows);
        self.1.row_completed(row, rows);
    }

    fn table_completed(&mut self, table: &BitMatrix) {
        self.0.table_completed(table);
        self.1.table_completed(table);
    }
}

/// Fill the reachability table for `weights` up to sum `target`
///
/// The result has `target + 1` rows and `weights.len() + 1` columns.
///
/// # Errors
///
/// Returns an allocation error if the table cannot be allocated
pub fn build_table<O>(weights: &[usize], target: usize, observer: &mut O) -> Result<BitMatrix>
where
    O: TableObserver + ?Sized,
{
    let rows = target.saturating_add(1);
    let columns = weights.len() + 1;
    let mut table = BitMatrix::allocate(rows, columns)?;

    table.fill_row(0);
    observer.row_completed(0, rows);

    for y in 1..rows {
        for (x, &weight) in weights.iter().enumerate() {
            // Column x covers the first x weights, so weight x moves us to column x + 1
            if table.get(y, x) || (weight <= y && table.get(y - weight, x)) {
                table.set(y, x + 1);
            }
        }
        observer.row_completed(y, rows);
    }

    observer.table_completed(&table);
    Ok(table)
}

/// Whether the full weight set reaches `target`
pub fn is_reachable(table: &BitMatrix, target: usize) -> bool {
    target < table.rows()
        && table
            .columns()
            .checked_sub(1)
            .is_some_and(|last| table.get(target, last))
}

/// Walk back from `(target, n)` and assign each weight to a side
///
/// Exclusion is tried before inclusion, which places an element on
/// [`Side::Second`] whenever the remaining sum is already reachable without
/// it. Returns `None` if `target` is not reachable in `table`.
pub fn reconstruct(table: &BitMatrix, weights: &[usize], target: usize) -> Option<Vec<Side>> {
    if !is_reachable(table, target) {
        return None;
    }

    let mut sides = vec![Side::Second; weights.len()];
    let mut remaining = target;

    for (x, (&weight, side)) in weights.iter().zip(sides.iter_mut()).enumerate().rev() {
        if table.get(remaining, x) {
            continue;
        }
        // T[remaining][x + 1] holds but T[remaining][x] does not, so weight x was taken
        *side = Side::First;
        remaining = remaining.checked_sub(weight)?;
    }

    (remaining == 0).then_some(sides)
}
