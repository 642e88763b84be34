pub mod dropdown_editor;
pub mod grid_dialog;
pub mod table_model;
