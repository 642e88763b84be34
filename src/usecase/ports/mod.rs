pub mod editor;
pub mod observer;
