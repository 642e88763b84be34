use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::domain::entities::choices::ChoiceSet;
use crate::domain::entities::grid::{GridChange, GridData};
use crate::initial_rows;
use crate::usecase::ports::editor::CellEditor;
use crate::usecase::ports::observer::ModelObserver;
use crate::usecase::services::dropdown_editor::DropdownCellEditor;
use crate::usecase::services::grid_dialog::{GridDialog, CHOICES, HEADERS};
use crate::usecase::services::table_model::{TableModel, CHOICE_COLUMN};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

fn demo_model() -> TableModel {
    let choices = ChoiceSet::new(CHOICES.iter().map(|c| c.to_string()).collect());
    let headers = HEADERS.iter().map(|h| h.to_string()).collect();
    TableModel::new(GridData::new(initial_rows(), headers), choices)
}

struct RecordingObserver {
    changes: Mutex<Vec<GridChange>>,
}

impl RecordingObserver {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            changes: Mutex::new(Vec::new()),
        })
    }

    fn changes(&self) -> Vec<GridChange> {
        self.changes.lock().expect("observer lock").clone()
    }
}

impl ModelObserver for RecordingObserver {
    fn grid_changed(&self, change: &GridChange) {
        self.changes.lock().expect("observer lock").push(*change);
    }
}

#[test]
fn empty_text_is_rejected_in_every_column() {
    let mut model = demo_model();

    for column in 0..model.column_count() {
        let before = model.cell_value(0, column).map(str::to_string);
        assert!(
            !model.set_cell_value(0, column, ""),
            "empty text should be rejected in column {column}"
        );
        assert_eq!(
            model.cell_value(0, column).map(str::to_string),
            before,
            "cell in column {column} should be unchanged"
        );
    }
}

#[test]
fn name_and_type_columns_accept_any_non_empty_text() {
    let mut model = demo_model();

    assert!(model.set_cell_value(0, 0, "anything at all"));
    assert_eq!(model.cell_value(0, 0), Some("anything at all"));
    assert!(model.set_cell_value(0, 1, "not even a choice"));
    assert_eq!(model.cell_value(0, 1), Some("not even a choice"));
}

#[test]
fn fraction_column_enforces_pattern_and_range() {
    let mut model = demo_model();

    for accepted in ["0.5", "1"] {
        assert!(
            model.set_cell_value(0, 2, accepted),
            "{accepted:?} should be accepted in the fraction column"
        );
        assert_eq!(model.cell_value(0, 2), Some(accepted));
    }

    for rejected in ["0", "1.5", "-0.3", "abc"] {
        let before = model.cell_value(0, 2).map(str::to_string);
        assert!(
            !model.set_cell_value(0, 2, rejected),
            "{rejected:?} should be rejected in the fraction column"
        );
        assert_eq!(model.cell_value(0, 2).map(str::to_string), before);
    }
}

#[test]
fn plain_numeric_columns_enforce_pattern_only() {
    let mut model = demo_model();

    for column in [3, 4] {
        for accepted in ["0", "3.14", "10"] {
            assert!(
                model.set_cell_value(0, column, accepted),
                "{accepted:?} should be accepted in column {column}"
            );
            assert_eq!(model.cell_value(0, column), Some(accepted));
        }
        for rejected in ["-1", "1.2.3", "", ".5", "1e3"] {
            let before = model.cell_value(0, column).map(str::to_string);
            assert!(
                !model.set_cell_value(0, column, rejected),
                "{rejected:?} should be rejected in column {column}"
            );
            assert_eq!(model.cell_value(0, column).map(str::to_string), before);
        }
    }
}

#[test]
fn accepted_write_notifies_a_single_cell_change() {
    let mut model = demo_model();
    let observer = RecordingObserver::new();
    model.subscribe(observer.clone());

    assert!(model.set_cell_value(1, 3, "2.5"));
    assert!(!model.set_cell_value(1, 3, "nope"));

    assert_eq!(
        observer.changes(),
        vec![GridChange::Cell { row: 1, column: 3 }],
        "only the accepted write should be reported"
    );
}

#[test]
fn append_row_adds_the_row_at_the_end_unchanged() {
    let mut model = demo_model();
    let before = model.row_count();

    model.append_row(row(&["A", "type_3", "0.1", "0.2", "0.3"]));

    assert_eq!(model.row_count(), before + 1);
    assert_eq!(
        model.rows()[before],
        row(&["A", "type_3", "0.1", "0.2", "0.3"])
    );
}

#[test]
fn insert_rows_at_front_shifts_existing_rows_down() {
    let mut model = demo_model();
    let original = model.rows().to_vec();
    assert_eq!(original.len(), 2);

    let inserted = vec![row(&["X", "type_2", "0.1", "0.1", "0.1"])];
    assert!(model.insert_rows(&inserted, 0));

    assert_eq!(model.row_count(), 3);
    assert_eq!(model.rows()[0], inserted[0]);
    assert_eq!(model.rows()[1], original[0]);
    assert_eq!(model.rows()[2], original[1]);
}

#[test]
fn inserted_rows_are_independent_copies() {
    let mut model = demo_model();
    let mut source = vec![row(&["X", "type_2", "0.1", "0.1", "0.1"])];

    assert!(model.insert_rows(&source, 0));
    source[0][0] = "mutated".to_string();

    assert_eq!(
        model.cell_value(0, 0),
        Some("X"),
        "inserted row should not alias caller-owned storage"
    );
}

#[test]
fn insert_rows_rejects_position_past_the_end() {
    let mut model = demo_model();
    let observer = RecordingObserver::new();
    model.subscribe(observer.clone());

    assert!(!model.insert_rows(&[row(&["X", "type_2", "0.1", "0.1", "0.1"])], 3));

    assert_eq!(model.row_count(), 2);
    assert!(observer.changes().is_empty());
}

#[test]
fn insert_notification_covers_the_inserted_range() {
    let mut model = demo_model();
    let observer = RecordingObserver::new();
    model.subscribe(observer.clone());

    let rows = vec![
        row(&["X", "type_2", "0.1", "0.1", "0.1"]),
        row(&["Y", "type_4", "0.2", "0.2", "0.2"]),
    ];
    assert!(model.insert_rows(&rows, 1));

    assert_eq!(
        observer.changes(),
        vec![GridChange::RowsInserted { first: 1, last: 2 }]
    );
    assert_eq!(model.rows()[1], rows[0]);
    assert_eq!(model.rows()[2], rows[1]);
}

#[test]
fn removing_descending_positions_keeps_the_middle_row() {
    let mut model = demo_model();
    model.append_row(row(&["C", "type_4", "0.3", "0.3", "0.3"]));
    let middle = model.rows()[1].clone();

    model.remove_rows(&[2, 0]);

    assert_eq!(model.row_count(), 1);
    assert_eq!(model.rows()[0], middle);
}

#[test]
fn remove_emits_one_notification_per_removed_row_and_skips_out_of_range() {
    let mut model = demo_model();
    let observer = RecordingObserver::new();
    model.subscribe(observer.clone());

    model.remove_rows(&[7, 1, 0]);

    assert_eq!(model.row_count(), 0);
    assert_eq!(
        observer.changes(),
        vec![
            GridChange::RowsRemoved { row: 1 },
            GridChange::RowsRemoved { row: 0 },
        ]
    );
}

#[test]
fn out_of_range_reads_return_none_and_writes_fail() {
    let mut model = demo_model();

    assert_eq!(model.cell_value(5, 0), None);
    assert_eq!(model.cell_value(0, 9), None);
    assert_eq!(model.header_label(9), None);
    assert!(!model.set_cell_value(5, 0, "X"));
}

#[test]
fn column_count_is_zero_without_rows() {
    let choices = ChoiceSet::new(CHOICES.iter().map(|c| c.to_string()).collect());
    let headers = HEADERS.iter().map(|h| h.to_string()).collect();
    let model = TableModel::new(GridData::new(Vec::new(), headers), choices);

    assert_eq!(model.row_count(), 0);
    assert_eq!(model.column_count(), 0);
    assert_eq!(model.header_label(1), Some("type"));
}

#[test]
fn export_returns_construction_rows_in_order() {
    let dialog = GridDialog::new(initial_rows());

    let exported = dialog.export();

    assert_eq!(exported, initial_rows().as_slice());
}

#[test]
fn append_default_row_uses_first_choice_and_zeroed_values() {
    let mut dialog = GridDialog::new(initial_rows());

    dialog.append_default_row();

    let last = dialog.model().rows().last().expect("row appended").clone();
    assert_eq!(last, row(&["Name", "type_7", "0.0", "0.0", "0.0"]));
}

#[test]
fn remove_selected_sorts_positions_descending() {
    let mut dialog = GridDialog::new(initial_rows());
    dialog
        .model_mut()
        .append_row(row(&["C", "type_4", "0.3", "0.3", "0.3"]));
    let middle = dialog.model().rows()[1].clone();

    let selected: BTreeSet<usize> = [0, 2].into_iter().collect();
    dialog.remove_selected(&selected);

    assert_eq!(dialog.model().row_count(), 1);
    assert_eq!(dialog.model().rows()[0], middle);
}

#[test]
fn dialog_installs_the_dropdown_editor_on_the_type_column() {
    let dialog = GridDialog::new(initial_rows());

    let editor = dialog
        .editor_for(CHOICE_COLUMN)
        .expect("type column should have an editor");
    assert_eq!(editor.column(), CHOICE_COLUMN);
    assert!(editor.wants_persistent_editor(0, CHOICE_COLUMN));
    assert!(!editor.wants_persistent_editor(0, 0));
    assert!(dialog.editor_for(0).is_none());
}

#[test]
fn dropdown_control_lists_every_choice_in_order() {
    let choices = ChoiceSet::new(CHOICES.iter().map(|c| c.to_string()).collect());
    let editor = DropdownCellEditor::new(CHOICE_COLUMN, choices);

    let control = editor.create_control();

    assert_eq!(control.items(), CHOICES.map(String::from).as_slice());
    assert_eq!(control.selected(), 0);
}

#[test]
fn dropdown_selects_the_entry_matching_the_stored_value() {
    let mut model = demo_model();
    assert!(model.set_cell_value(0, CHOICE_COLUMN, CHOICES[2]));
    let editor = DropdownCellEditor::new(CHOICE_COLUMN, model.choices().clone());

    let mut control = editor.create_control();
    editor.set_control_data(&mut control, &model, 0, CHOICE_COLUMN);

    assert_eq!(control.selected(), 2);
    assert_eq!(control.selected_text(), CHOICES[2]);
}

#[test]
fn dropdown_commit_writes_back_to_the_originating_cell_only() {
    let mut model = demo_model();
    let observer = RecordingObserver::new();
    model.subscribe(observer.clone());
    let editor = DropdownCellEditor::new(CHOICE_COLUMN, model.choices().clone());
    let other_row_value = model.cell_value(0, CHOICE_COLUMN).map(str::to_string);

    let mut control = editor.create_control();
    editor.set_control_data(&mut control, &model, 1, CHOICE_COLUMN);
    control.select(4);
    assert!(editor.commit(&control, &mut model, 1, CHOICE_COLUMN));

    assert_eq!(model.cell_value(1, CHOICE_COLUMN), Some(CHOICES[4]));
    assert_eq!(
        model.cell_value(0, CHOICE_COLUMN).map(str::to_string),
        other_row_value,
        "commit should not touch other rows"
    );
    assert_eq!(
        observer.changes(),
        vec![GridChange::Cell {
            row: 1,
            column: CHOICE_COLUMN,
        }]
    );
}

#[test]
#[should_panic(expected = "member of the choice set")]
fn dropdown_population_panics_on_a_value_outside_the_choice_set() {
    let mut model = demo_model();
    assert!(model.set_cell_value(0, CHOICE_COLUMN, "not_a_choice"));
    let editor = DropdownCellEditor::new(CHOICE_COLUMN, model.choices().clone());

    let mut control = editor.create_control();
    editor.set_control_data(&mut control, &model, 0, CHOICE_COLUMN);
}

#[test]
fn choice_set_positions_follow_construction_order() {
    let choices = ChoiceSet::new(CHOICES.iter().map(|c| c.to_string()).collect());

    assert_eq!(choices.len(), 5);
    assert!(!choices.is_empty());
    assert_eq!(choices.get(0), Some("type_7"));
    assert_eq!(choices.position("type_5"), Some(4));
    assert_eq!(choices.position("type_6"), None);
}

#[test]
fn grid_data_rectangularity_check() {
    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();

    let rectangular = GridData::new(initial_rows(), headers.clone());
    assert!(rectangular.is_rectangular());

    let ragged = GridData::new(vec![row(&["A", "type_2"])], headers);
    assert!(!ragged.is_rectangular());
}
