use std::sync::Arc;

/// Fixed ordered list of values allowed in the choice column. Built once
/// when the dialog is created and shared read-only between the table model
/// and the dropdown editor so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    items: Vec<String>,
}

impl ChoiceSet {
    pub fn new(items: Vec<String>) -> Arc<Self> {
        Arc::new(Self { items })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Position of a stored cell value within the choice list.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
