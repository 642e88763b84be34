use crate::usecase::services::table_model::TableModel;

/// Framework-free description of a dropdown editing control: the ordered
/// entries shown to the user and which one is currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    items: Vec<String>,
    selected: usize,
}

impl DropdownState {
    pub fn new(items: Vec<String>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Text of the currently selected entry. Empty when the control holds
    /// no entries at all.
    pub fn selected_text(&self) -> &str {
        self.items
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Per-column editing strategy the grid view calls through. An editor is
/// installed on exactly one column; cells of every other column fall back
/// to plain text editing.
pub trait CellEditor: Send + Sync {
    /// The column this editor is installed on.
    fn column(&self) -> usize;

    /// True when the view should keep an editing control continuously
    /// visible for this cell instead of waiting for an edit trigger.
    fn wants_persistent_editor(&self, row: usize, column: usize) -> bool;

    /// Build a fresh editing control populated with every allowed entry
    /// in order.
    fn create_control(&self) -> DropdownState;

    /// Point the control's selection at the entry matching the cell's
    /// current value.
    ///
    /// Panics when the stored value is not one of the control's entries:
    /// cells under this editor must only ever hold values it wrote, so a
    /// miss is a programming-contract violation with no defined recovery.
    fn set_control_data(
        &self,
        control: &mut DropdownState,
        model: &TableModel,
        row: usize,
        column: usize,
    );

    /// Write the control's selected text back into the originating cell
    /// through the model's validated write path.
    fn commit(
        &self,
        control: &DropdownState,
        model: &mut TableModel,
        row: usize,
        column: usize,
    ) -> bool;
}
