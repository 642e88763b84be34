use std::collections::BTreeSet;

use dioxus::prelude::{use_signal, Signal};

use crate::initial_rows;
use crate::usecase::services::grid_dialog::GridDialog;

pub struct AppState {
    pub dialog: Signal<GridDialog>,
    pub selected_rows: Signal<BTreeSet<usize>>,
    pub editing_cell: Signal<Option<(usize, usize)>>,
    pub editing_value: Signal<String>,
    pub open_dropdown: Signal<Option<usize>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dialog: use_signal(|| GridDialog::new(initial_rows())),
            selected_rows: use_signal(BTreeSet::<usize>::new),
            editing_cell: use_signal(|| None::<(usize, usize)>),
            editing_value: use_signal(String::new),
            open_dropdown: use_signal(|| None::<usize>),
            dropdown_pos: use_signal(|| None::<(f64, f64)>),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
