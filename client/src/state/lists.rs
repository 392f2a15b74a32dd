//! State of a collection list page.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id awaiting in-page delete confirmation.
    pub pending_delete: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, pending_delete: None }
    }
}

impl<T> ListState<T> {
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Fetch failed: keep whatever was shown and surface the message.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Id confirmed for deletion, clearing the prompt.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

impl<T> ListState<T> {
    /// Drop the item whose id matches after a successful delete.
    pub fn remove(&mut self, id: &str, id_of: impl Fn(&T) -> Option<&str>) {
        self.items.retain(|item| id_of(item) != Some(id));
    }
}
