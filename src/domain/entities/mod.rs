pub mod choices;
pub mod grid;
