//! Read-only preview of one list row, fetched fresh when opened.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState<T> {
    /// Id of the row being previewed; `None` while the dialog is closed.
    pub open_id: Option<String>,
    pub record: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for PreviewState<T> {
    fn default() -> Self {
        Self { open_id: None, record: None, error: None }
    }
}

impl<T> PreviewState<T> {
    /// Open for `id`, dropping whatever the previous preview showed.
    pub fn open(&mut self, id: &str) {
        self.open_id = Some(id.to_owned());
        self.record = None;
        self.error = None;
    }

    /// Fetch finished. Ignored unless `id` is still the open row.
    pub fn loaded(&mut self, id: &str, record: T) {
        if self.is_showing(id) {
            self.record = Some(record);
        }
    }

    pub fn failed(&mut self, id: &str, message: impl Into<String>) {
        if self.is_showing(id) {
            self.error = Some(message.into());
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open_id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_open() && self.record.is_none() && self.error.is_none()
    }

    fn is_showing(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }
}
