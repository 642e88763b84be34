use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::domain::entities::choices::ChoiceSet;
use crate::domain::entities::grid::{GridChange, GridData};
use crate::usecase::ports::observer::ModelObserver;

/// Index of the column backed by the fixed choice set.
pub const CHOICE_COLUMN: usize = 1;
/// Index of the column whose numeric value must stay in (0, 1].
pub const FRACTION_COLUMN: usize = 2;

/// Accepted shape for numeric cells: an integer part, optionally followed
/// by a fractional part. No sign, no exponent, no leading dot. The exact
/// accepted string set is contractual; do not swap this for a general
/// numeric parse.
const NUMERIC_PATTERN: &str = r"^[0-9]\d*(\.\d+)?$";

/// Owns the grid data and enforces the per-column write rules. Mutations
/// go through `set_cell_value` / `insert_rows` / `remove_rows`; each
/// accepted mutation is reported to every registered observer.
pub struct TableModel {
    data: GridData,
    choices: Arc<ChoiceSet>,
    numeric: Regex,
    observers: Vec<Arc<dyn ModelObserver>>,
}

impl TableModel {
    pub fn new(data: GridData, choices: Arc<ChoiceSet>) -> Self {
        let numeric = Regex::new(NUMERIC_PATTERN).expect("numeric cell pattern should compile");
        Self {
            data,
            choices,
            numeric,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    /// The choice set shared with the dropdown editor for the choice
    /// column.
    pub fn choices(&self) -> &Arc<ChoiceSet> {
        &self.choices
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.data.column_count()
    }

    pub fn header_label(&self, column: usize) -> Option<&str> {
        self.data.headers().get(column).map(String::as_str)
    }

    pub fn headers(&self) -> &[String] {
        self.data.headers()
    }

    pub fn cell_value(&self, row: usize, column: usize) -> Option<&str> {
        self.data.cell(row, column)
    }

    /// The live backing rows. Export hands this straight to the caller;
    /// it is a view of the mutable data, not a copy.
    pub fn rows(&self) -> &[Vec<String>] {
        self.data.rows()
    }

    /// Validated cell write. Returns false and leaves the grid untouched
    /// when the text is rejected or the index is out of range; on success
    /// the cell is updated in place and observers see a `Cell` change.
    ///
    /// Rules: empty text is always rejected; the name and type columns
    /// accept any non-empty text; the fraction column must match the
    /// numeric pattern with a value in (0, 1]; the remaining columns must
    /// match the numeric pattern.
    pub fn set_cell_value(&mut self, row: usize, column: usize, raw: &str) -> bool {
        if raw.is_empty() || self.data.cell(row, column).is_none() {
            return false;
        }
        if !self.accepts(column, raw) {
            debug!(row, column, value = raw, "cell write rejected");
            return false;
        }
        self.data.rows_mut()[row][column] = raw.to_string();
        self.notify(GridChange::Cell { row, column });
        true
    }

    fn accepts(&self, column: usize, raw: &str) -> bool {
        if column <= CHOICE_COLUMN {
            return true;
        }
        if !self.numeric.is_match(raw) {
            return false;
        }
        if column == FRACTION_COLUMN {
            return matches!(raw.parse::<f64>(), Ok(v) if v > 0.0 && v <= 1.0);
        }
        true
    }

    /// Inserts the given rows at `position`, preserving their relative
    /// order and shifting later rows down. Every inserted row is an
    /// independent copy of the caller's data. Returns false without
    /// mutating when `position` is past the end.
    pub fn insert_rows(&mut self, rows: &[Vec<String>], position: usize) -> bool {
        if position > self.data.row_count() {
            return false;
        }
        if rows.is_empty() {
            return true;
        }
        for (offset, row) in rows.iter().enumerate() {
            self.data.rows_mut().insert(position + offset, row.clone());
        }
        self.notify(GridChange::RowsInserted {
            first: position,
            last: position + rows.len() - 1,
        });
        true
    }

    /// Removes each position as a literal index into the array as it is
    /// at the time of that removal. Earlier removals shift later rows, so
    /// callers must pass strictly descending positions; `GridDialog`
    /// sorts its selection accordingly. Positions past the current end
    /// are skipped. One `RowsRemoved` change is reported per removed row.
    pub fn remove_rows(&mut self, positions: &[usize]) {
        for &position in positions {
            if position >= self.data.row_count() {
                continue;
            }
            self.data.rows_mut().remove(position);
            self.notify(GridChange::RowsRemoved { row: position });
        }
    }

    pub fn append_row(&mut self, row: Vec<String>) {
        self.insert_rows(&[row], self.row_count());
    }

    fn notify(&self, change: GridChange) {
        for observer in &self.observers {
            observer.grid_changed(&change);
        }
    }
}
