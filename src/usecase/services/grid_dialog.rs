use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::info;

use crate::domain::entities::choices::ChoiceSet;
use crate::domain::entities::grid::GridData;
use crate::usecase::ports::editor::CellEditor;
use crate::usecase::services::dropdown_editor::DropdownCellEditor;
use crate::usecase::services::table_model::{TableModel, CHOICE_COLUMN};

/// Fixed column header labels, by position.
pub const HEADERS: [&str; 5] = ["name", "type", "var1", "var2", "var5"];

/// Fixed entries for the type column's dropdown.
pub const CHOICES: [&str; 5] = ["type_7", "type_2", "type_3", "type_4", "type_5"];

/// Composition root behind the grid dialog: owns the table model and the
/// per-column editor table, and exposes the three toolbar actions. The
/// rendering layer stays outside and only talks to the model and editors
/// through this type.
pub struct GridDialog {
    model: TableModel,
    choices: Arc<ChoiceSet>,
    editors: BTreeMap<usize, Arc<dyn CellEditor>>,
}

impl GridDialog {
    /// Builds the dialog around the caller-supplied initial rows. Rows
    /// must be rectangular with one cell per header, and type-column
    /// values must come from `CHOICES`.
    pub fn new(initial_rows: Vec<Vec<String>>) -> Self {
        let choices = ChoiceSet::new(CHOICES.iter().map(|c| c.to_string()).collect());
        let headers = HEADERS.iter().map(|h| h.to_string()).collect();
        let data = GridData::new(initial_rows, headers);
        debug_assert!(data.is_rectangular(), "initial rows must be rectangular");

        let model = TableModel::new(data, choices.clone());
        let mut editors: BTreeMap<usize, Arc<dyn CellEditor>> = BTreeMap::new();
        editors.insert(
            CHOICE_COLUMN,
            Arc::new(DropdownCellEditor::new(CHOICE_COLUMN, choices.clone())),
        );

        Self {
            model,
            choices,
            editors,
        }
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut TableModel {
        &mut self.model
    }

    pub fn choices(&self) -> &Arc<ChoiceSet> {
        &self.choices
    }

    pub fn editor_for(&self, column: usize) -> Option<&Arc<dyn CellEditor>> {
        self.editors.get(&column)
    }

    /// Appends the stock default row: placeholder name, first choice,
    /// zeroed numeric columns.
    pub fn append_default_row(&mut self) {
        let first_choice = self
            .choices
            .get(0)
            .unwrap_or_default()
            .to_string();
        self.model.append_row(vec![
            "Name".to_string(),
            first_choice,
            "0.0".to_string(),
            "0.0".to_string(),
            "0.0".to_string(),
        ]);
    }

    /// Removes the rows currently selected in the view. The distinct
    /// indices are sorted descending before removal so earlier removals
    /// cannot shift the positions still to be processed.
    pub fn remove_selected(&mut self, selected: &BTreeSet<usize>) {
        let mut positions: Vec<usize> = selected.iter().copied().collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        self.model.remove_rows(&positions);
    }

    /// Hands out the current rows as held by the model. This is the live
    /// data, not a snapshot copy; later edits show through.
    pub fn export(&self) -> &[Vec<String>] {
        let rows = self.model.rows();
        info!(row_count = rows.len(), rows = ?rows, "exported grid data");
        rows
    }
}
