/// One mutation of the grid, reported to observers after it took effect.
/// Structural changes are distinct from single-cell value changes so a
/// view can refresh only what moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridChange {
    /// A single cell changed value.
    Cell { row: usize, column: usize },
    /// Rows were inserted at the inclusive index range `first..=last`.
    RowsInserted { first: usize, last: usize },
    /// The row at `row` was removed. Emitted once per removed row.
    RowsRemoved { row: usize },
}

/// The in-memory dataset behind the grid: ordered rows of textual cells
/// plus the fixed column header labels. Insertion order is display order.
/// Pure storage; validation and mutation rules live in the table model.
///
/// Invariant: every row has exactly `headers.len()` cells. The caller
/// supplies the initial rows and is responsible for keeping them
/// rectangular; `is_rectangular` exists so composition roots can check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridData {
    rows: Vec<Vec<String>>,
    headers: Vec<String>,
}

impl GridData {
    pub fn new(rows: Vec<Vec<String>>, headers: Vec<String>) -> Self {
        Self { rows, headers }
    }

    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.headers.len())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count follows the stored rows, not the headers: an empty
    /// grid reports zero columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }
}
