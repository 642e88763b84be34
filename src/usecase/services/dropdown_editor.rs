use std::sync::Arc;

use crate::domain::entities::choices::ChoiceSet;
use crate::usecase::ports::editor::{CellEditor, DropdownState};
use crate::usecase::services::table_model::TableModel;

/// Dropdown editing strategy for one column: the control stays
/// persistently visible in every cell of that column, offers the fixed
/// choice set in order, and commits as soon as the selection changes.
pub struct DropdownCellEditor {
    column: usize,
    choices: Arc<ChoiceSet>,
}

impl DropdownCellEditor {
    pub fn new(column: usize, choices: Arc<ChoiceSet>) -> Self {
        Self { column, choices }
    }
}

impl CellEditor for DropdownCellEditor {
    fn column(&self) -> usize {
        self.column
    }

    fn wants_persistent_editor(&self, _row: usize, column: usize) -> bool {
        column == self.column
    }

    fn create_control(&self) -> DropdownState {
        DropdownState::new(self.choices.items().to_vec())
    }

    fn set_control_data(
        &self,
        control: &mut DropdownState,
        model: &TableModel,
        row: usize,
        column: usize,
    ) {
        let value = model.cell_value(row, column).unwrap_or("");
        let index = self
            .choices
            .position(value)
            .expect("choice-column cell value must be a member of the choice set");
        control.select(index);
    }

    fn commit(
        &self,
        control: &DropdownState,
        model: &mut TableModel,
        row: usize,
        column: usize,
    ) -> bool {
        model.set_cell_value(row, column, control.selected_text())
    }
}
