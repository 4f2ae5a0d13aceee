//! Generalized Wagner–Fischer edit distance with traceback.
//!
//! Elements only need `PartialEq`. Costs may be asymmetric; a match is free.
//! The traceback tie-break is fixed so that, among several optimal
//! alignments, the same one is always reported:
//!
//! 1. diagonal (match or substitute) when it reproduces the cell's cost,
//! 2. otherwise a deletion when the upper cell is strictly below the left cell,
//! 3. otherwise an insertion.
//!
//! Step 2 compares the neighbouring cells alone, without the cost of the step
//! into them. With `insertion != deletion` the reported script can therefore
//! cost more than the returned distance; the distance itself is always exact.

use tracing::trace;

use crate::alignment::{AlignmentResult, EditCosts, EditOp, Slot};

/// Row-major `(rows × cols)` cost table.
struct CostTable {
    cols: usize,
    cells: Vec<u64>,
}

impl CostTable {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u64 {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u64) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Align `a` against `b`, returning the edit distance and one optimal alignment.
///
/// Total over any two finite sequences; empty inputs are fine.
pub fn align<'a, T: PartialEq>(
    a: &'a [T],
    b: &'a [T],
    costs: EditCosts,
) -> (u64, AlignmentResult<'a, T>) {
    let table = fill(a, b, &costs);
    let cost = table.get(a.len(), b.len());
    let result = traceback(a, b, &costs, &table);
    trace!(
        len_a = a.len(),
        len_b = b.len(),
        cost,
        columns = result.len(),
        "aligned sequences"
    );
    (cost, result)
}

/// Edit distance only. Same table as `align`, no traceback.
pub fn distance<T: PartialEq>(a: &[T], b: &[T], costs: EditCosts) -> u64 {
    fill(a, b, &costs).get(a.len(), b.len())
}

fn fill<T: PartialEq>(a: &[T], b: &[T], costs: &EditCosts) -> CostTable {
    let ins = u64::from(costs.insertion);
    let del = u64::from(costs.deletion);
    let sub = u64::from(costs.substitution);

    let mut d = CostTable::new(a.len() + 1, b.len() + 1);
    for i in 0..a.len() {
        d.set(i + 1, 0, d.get(i, 0) + del);
    }
    for j in 0..b.len() {
        d.set(0, j + 1, d.get(0, j) + ins);
    }

    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            let value = if x == y {
                d.get(i, j)
            } else {
                (d.get(i + 1, j) + ins)
                    .min(d.get(i, j + 1) + del)
                    .min(d.get(i, j) + sub)
            };
            d.set(i + 1, j + 1, value);
        }
    }
    d
}

fn traceback<'a, T: PartialEq>(
    a: &'a [T],
    b: &'a [T],
    costs: &EditCosts,
    d: &CostTable,
) -> AlignmentResult<'a, T> {
    let sub = u64::from(costs.substitution);

    let capacity = a.len() + b.len();
    let mut ops = Vec::with_capacity(capacity);
    let mut aligned_a = Vec::with_capacity(capacity);
    let mut aligned_b = Vec::with_capacity(capacity);

    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        let here = d.get(i, j);
        let same = a[i - 1] == b[j - 1];
        let diagonal = d.get(i - 1, j - 1) + if same { 0 } else { sub };

        if diagonal == here {
            ops.push(if same { EditOp::Match } else { EditOp::Substitute });
            aligned_a.push(Slot::Item(&a[i - 1]));
            aligned_b.push(Slot::Item(&b[j - 1]));
            i -= 1;
            j -= 1;
        } else if d.get(i - 1, j) < d.get(i, j - 1) {
            ops.push(EditOp::Delete);
            aligned_a.push(Slot::Item(&a[i - 1]));
            aligned_b.push(Slot::Gap);
            i -= 1;
        } else {
            ops.push(EditOp::Insert);
            aligned_a.push(Slot::Gap);
            aligned_b.push(Slot::Item(&b[j - 1]));
            j -= 1;
        }
    }

    // One side ran out: whatever is left is pure deletion or insertion.
    while i > 0 {
        ops.push(EditOp::Delete);
        aligned_a.push(Slot::Item(&a[i - 1]));
        aligned_b.push(Slot::Gap);
        i -= 1;
    }
    while j > 0 {
        ops.push(EditOp::Insert);
        aligned_a.push(Slot::Gap);
        aligned_b.push(Slot::Item(&b[j - 1]));
        j -= 1;
    }

    // Built walking backwards from (len_a, len_b).
    ops.reverse();
    aligned_a.reverse();
    aligned_b.reverse();

    AlignmentResult {
        aligned_a,
        aligned_b,
        ops,
    }
}
