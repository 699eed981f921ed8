//! [Exact cover](https://en.wikipedia.org/wiki/Exact_cover) model of a
//! region-fitting problem and an
//! [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X) style
//! search over it.
//!
//! The matrix is kept as flat index arrays rather than linked nodes: every
//! column tracks an active flag and a live count of candidate rows, every row
//! tracks how many of its columns have been covered. Covering appends
//! [`CoverOp`] records to an operation log so that backtracking restores the
//! exact prior state.

use crate::{placement, region::Region, shape::Shape};

/// The row/column matrix for one region.
///
/// Columns are laid out as one column per region cell (row-major), followed
/// by one column per required shape instance. Rows are placements paired with
/// an instance column, plus one filler row per cell when the required area
/// leaves room for empty cells. A solution is a set of rows covering every
/// column exactly once.
#[derive(Debug)]
pub struct Model {
    /// Number of leading columns that represent region cells.
    pub cell_columns: usize,
    /// Total number of columns, cells plus shape instances.
    pub num_columns: usize,
    /// Rows as sorted, deduplicated lists of column indices.
    pub rows: Vec<Vec<usize>>,
}

impl Model {
    /// Build the exact-cover matrix for the given shapes and region.
    pub fn build(shapes: &[Shape], region: &Region) -> Self {
        let cell_columns = region.cell_count();

        // One column per required instance, grouped by shape. Any instance of
        // a shape can use any of its placements, but giving each instance its
        // own column keeps one placement from counting against two required
        // slots at once.
        let mut next_column = cell_columns;
        let mut instance_columns: Vec<Vec<usize>> = Vec::with_capacity(region.counts().len());
        for &count in region.counts() {
            instance_columns.push((next_column..next_column + count).collect());
            next_column += count;
        }

        let width = region.width();
        let mut rows = Vec::new();
        for placement in placement::enumerate(shapes, region) {
            let cell_cols: Vec<usize> = placement
                .cells
                .iter()
                .map(|&(x, y)| y as usize * width + x as usize)
                .collect();

            for &instance in &instance_columns[placement.shape_index] {
                let mut row = cell_cols.clone();
                row.push(instance);
                row.sort_unstable();
                row.dedup();
                rows.push(row);
            }
        }

        // Filler rows let a cell column be satisfied while the cell stays
        // empty, keeping the cover exact when the shapes cannot fill the
        // whole rectangle.
        if region.required_area(shapes) < cell_columns {
            for cell in 0..cell_columns {
                rows.push(vec![cell]);
            }
        }

        log::debug!(
            "Built exact-cover model with [{}] columns ([{}] cell columns) and [{}] rows.",
            next_column,
            cell_columns,
            rows.len()
        );

        Self {
            cell_columns,
            num_columns: next_column,
            rows,
        }
    }

    /// Return true if some subset of rows covers every column exactly once.
    pub fn has_exact_cover(&self) -> bool {
        match Search::new(self) {
            Some(mut search) => search.run(),
            // A column no row can cover is an immediate dead end.
            None => false,
        }
    }
}

/// Record of one covered column: which rows it newly blocked, so the cover
/// can be undone exactly and in O(affected rows).
struct CoverOp {
    column: usize,
    blocked_rows: Vec<usize>,
}

struct Search<'m> {
    rows: &'m [Vec<usize>],
    cell_columns: usize,
    num_columns: usize,
    /// Rows containing each column.
    column_rows: Vec<Vec<usize>>,
    /// Whether each column still needs covering.
    active: Vec<bool>,
    /// Live count of unblocked rows that could cover each active column.
    candidates: Vec<usize>,
    /// Per row, how many of its columns have been covered by selected rows.
    /// A row is eligible for selection only while this is zero.
    blocked: Vec<usize>,
}

impl<'m> Search<'m> {
    /// Build the search state, or `None` if some column has no covering row.
    fn new(model: &'m Model) -> Option<Self> {
        let mut column_rows = vec![Vec::new(); model.num_columns];
        for (row, columns) in model.rows.iter().enumerate() {
            for &column in columns {
                column_rows[column].push(row);
            }
        }

        let candidates: Vec<usize> = column_rows.iter().map(Vec::len).collect();
        if candidates.iter().any(|&count| count == 0) {
            return None;
        }

        Some(Self {
            rows: &model.rows,
            cell_columns: model.cell_columns,
            num_columns: model.num_columns,
            column_rows,
            active: vec![true; model.num_columns],
            candidates,
            blocked: vec![0; model.rows.len()],
        })
    }

    fn run(&mut self) -> bool {
        self.search()
    }

    fn search(&mut self) -> bool {
        // Select the active column with the fewest candidate rows. Instance
        // columns branch far less than cell columns once filler rows exist,
        // so they are scanned first; cell columns are only considered when no
        // instance column remains active.
        let mut selected = None;
        let mut best = usize::MAX;
        for column in self.cell_columns..self.num_columns {
            if !self.active[column] {
                continue;
            }
            let count = self.candidates[column];
            if count == 0 {
                return false;
            }
            if count < best {
                best = count;
                selected = Some(column);
                if best == 1 {
                    break;
                }
            }
        }
        if selected.is_none() {
            for column in 0..self.cell_columns {
                if !self.active[column] {
                    continue;
                }
                let count = self.candidates[column];
                if count == 0 {
                    return false;
                }
                if count < best {
                    best = count;
                    selected = Some(column);
                    if best == 1 {
                        break;
                    }
                }
            }
        }
        let Some(selected) = selected else {
            // No active columns remain: every column is covered exactly once.
            return true;
        };

        for index in 0..self.column_rows[selected].len() {
            let row = self.column_rows[selected][index];
            if self.blocked[row] != 0 {
                continue;
            }

            // Tentatively select this row: cover every column it touches
            // that is still active, keeping the log for the undo below.
            let mut log = Vec::new();
            let rows = self.rows;
            for &column in &rows[row] {
                if self.active[column] {
                    log.push(self.cover(column));
                }
            }

            if self.search() {
                return true;
            }

            while let Some(op) = log.pop() {
                self.uncover(op);
            }
        }

        false
    }

    /// Deactivate a column and block every row that contains it, adjusting
    /// the candidate counts of the other active columns those rows touch.
    fn cover(&mut self, column: usize) -> CoverOp {
        self.active[column] = false;

        let rows = self.rows;
        let mut blocked_rows = Vec::new();
        for index in 0..self.column_rows[column].len() {
            let row = self.column_rows[column][index];
            let previously = self.blocked[row];
            self.blocked[row] += 1;
            if previously == 0 {
                blocked_rows.push(row);
                for &other in &rows[row] {
                    if other != column && self.active[other] {
                        self.candidates[other] -= 1;
                    }
                }
            }
        }

        CoverOp {
            column,
            blocked_rows,
        }
    }

    /// Exact inverse of [`Search::cover`], applied in reverse log order.
    fn uncover(&mut self, op: CoverOp) {
        // Reactivate first, so rows coming back also restore this column.
        self.active[op.column] = true;

        let rows = self.rows;
        for &row in &op.blocked_rows {
            self.blocked[row] -= 1;
            if self.blocked[row] == 0 {
                for &other in &rows[row] {
                    if self.active[other] {
                        self.candidates[other] += 1;
                    }
                }
            }
        }

        // Recount the reactivated column from scratch; rows blocked by other
        // covers must not be double counted.
        let blocked = &self.blocked;
        let count = self.column_rows[op.column]
            .iter()
            .filter(|&&row| blocked[row] == 0)
            .count();
        self.candidates[op.column] = count;
    }
}
