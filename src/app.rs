use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;
use crate::{
    table_cell_style, table_container_style, table_header_cell_style, toolbar_button_style,
};

/// Persistently visible dropdown for a choice-column cell: a button
/// showing the current value plus a fixed-position option list. Picking
/// an option fires `on_select` immediately; there is no confirm step.
#[component]
fn ChoiceCellDropdown(
    row: usize,
    items: Vec<String>,
    selected: usize,
    mut open_dropdown: Signal<Option<usize>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_select: EventHandler<String>,
) -> Element {
    let is_open = open_dropdown() == Some(row);
    let selected_label = items.get(selected).cloned().unwrap_or_default();
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center;",
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer; min-width: 90px;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown() == Some(row) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(row));
                },
                "{selected_label}"
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 120px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {items.iter().enumerate().map(|(idx, item)| {
                    let value = item.clone();
                    let label = item.clone();
                    let background = if idx == selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                open_dropdown.set(None);
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut dialog,
        mut selected_rows,
        mut editing_cell,
        mut editing_value,
        mut open_dropdown,
        dropdown_pos,
        mut status,
    } = AppState::new();

    let headers: Vec<String> = dialog.read().model().headers().to_vec();
    let rows: Vec<Vec<String>> = dialog.read().model().rows().to_vec();
    let row_count = rows.len();
    let selected_rows_snapshot = selected_rows();
    let editing_cell_snapshot = editing_cell();
    let all_rows_selected = row_count > 0 && selected_rows_snapshot.len() == row_count;

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",
            onclick: move |_| open_dropdown.set(None),

            div {
                style: "display: flex; gap: 8px; margin-bottom: 10px;",
                button {
                    style: "{toolbar_button_style()}",
                    onclick: move |_| {
                        dialog.write().append_default_row();
                        *status.write() = "Row added".to_string();
                    },
                    "Add row"
                }
                button {
                    style: "{toolbar_button_style()}",
                    onclick: move |_| {
                        let selected = selected_rows();
                        if selected.is_empty() {
                            *status.write() = "No rows selected".to_string();
                            return;
                        }
                        let removed = selected.len();
                        dialog.write().remove_selected(&selected);
                        selected_rows.write().clear();
                        editing_cell.set(None);
                        *status.write() = format!("Removed {removed} row(s)");
                    },
                    "Delete selected"
                }
                button {
                    style: "{toolbar_button_style()}",
                    onclick: move |_| {
                        let exported = dialog.read().export().len();
                        *status.write() = format!("Exported {exported} row(s)");
                    },
                    "Export"
                }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}",
                                input {
                                    r#type: "checkbox",
                                    checked: all_rows_selected,
                                    onclick: move |_| {
                                        if all_rows_selected {
                                            selected_rows.write().clear();
                                            return;
                                        }
                                        let mut next = selected_rows.write();
                                        next.clear();
                                        for idx in 0..row_count {
                                            next.insert(idx);
                                        }
                                    }
                                }
                            }
                            for header in headers.iter() {
                                th { style: "{table_header_cell_style()}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        {rows.iter().enumerate().map(|(row_idx, row)| {
                            let row = row.clone();
                            let row_style = if selected_rows_snapshot.contains(&row_idx) {
                                "background: #eef4ff;"
                            } else {
                                ""
                            };
                            let row_selected = selected_rows_snapshot.contains(&row_idx);
                            rsx!(
                                tr {
                                    style: "{row_style}",
                                    td { style: "{table_cell_style()} text-align: center;",
                                        input {
                                            r#type: "checkbox",
                                            checked: row_selected,
                                            onclick: move |_| {
                                                let mut selected = selected_rows.write();
                                                if selected.contains(&row_idx) {
                                                    selected.remove(&row_idx);
                                                } else {
                                                    selected.insert(row_idx);
                                                }
                                            }
                                        }
                                    }
                                    {row.iter().enumerate().map(|(col_idx, value)| {
                                        let value = value.clone();
                                        let display = value.clone();
                                        // Cells under a persistent editor render its
                                        // control instead of plain text.
                                        let control = {
                                            let d = dialog.read();
                                            d.editor_for(col_idx)
                                                .filter(|editor| {
                                                    editor.wants_persistent_editor(row_idx, col_idx)
                                                })
                                                .cloned()
                                                .map(|editor| {
                                                    let mut control = editor.create_control();
                                                    editor.set_control_data(
                                                        &mut control,
                                                        d.model(),
                                                        row_idx,
                                                        col_idx,
                                                    );
                                                    control
                                                })
                                        };
                                        if let Some(control) = control {
                                            rsx!(
                                                td { style: "{table_cell_style()}",
                                                    ChoiceCellDropdown {
                                                        row: row_idx,
                                                        items: control.items().to_vec(),
                                                        selected: control.selected(),
                                                        open_dropdown,
                                                        dropdown_pos,
                                                        on_select: move |choice: String| {
                                                            let mut d = dialog.write();
                                                            let editor = d.editor_for(col_idx).cloned();
                                                            if let Some(editor) = editor {
                                                                let mut control = editor.create_control();
                                                                if let Some(idx) = control
                                                                    .items()
                                                                    .iter()
                                                                    .position(|item| item == &choice)
                                                                {
                                                                    control.select(idx);
                                                                }
                                                                editor.commit(&control, d.model_mut(), row_idx, col_idx);
                                                            }
                                                        },
                                                    }
                                                }
                                            )
                                        } else if editing_cell_snapshot == Some((row_idx, col_idx)) {
                                            rsx!(
                                                td { style: "{table_cell_style()}",
                                                    input {
                                                        value: editing_value(),
                                                        oninput: move |event| {
                                                            editing_value.set(event.value());
                                                        },
                                                        onkeydown: move |event| {
                                                            if event.key() == Key::Enter {
                                                                let next_value = editing_value();
                                                                // Rejected text is dropped silently; the
                                                                // cell keeps its old value.
                                                                dialog.write().model_mut().set_cell_value(
                                                                    row_idx,
                                                                    col_idx,
                                                                    &next_value,
                                                                );
                                                                editing_cell.set(None);
                                                                editing_value.set(String::new());
                                                            } else if event.key() == Key::Escape {
                                                                editing_cell.set(None);
                                                                editing_value.set(String::new());
                                                            }
                                                        }
                                                    }
                                                }
                                            )
                                        } else {
                                            rsx!(
                                                td {
                                                    style: "{table_cell_style()}",
                                                    ondoubleclick: move |_| {
                                                        editing_cell.set(Some((row_idx, col_idx)));
                                                        editing_value.set(value.clone());
                                                    },
                                                    "{display}"
                                                }
                                            )
                                        }
                                    })}
                                }
                            )
                        })}
                    }
                }
            }

            div { style: "margin-top: 10px; color: #555;", "{status}" }
        }
    }
}
