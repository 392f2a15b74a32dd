//! Sequential upload queue.
//!
//! DESIGN
//! ======
//! Files go up strictly one at a time. The uploader loop asks `next()` for
//! the index to send, marks it `start`, then reports `complete` or `fail`.
//! The first failure marks everything still pending as skipped, so `next()`
//! returns `None` and the loop ends.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Failure message when the server accepted a file but described none.
pub const NO_FILE_INFO: &str = "Upload succeeded but server returned no file info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Pending,
    Uploading,
    Done,
    Failed(String),
    Skipped,
}

impl UploadStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Uploading => "uploading",
            Self::Done => "done",
            Self::Failed(message) => message,
            Self::Skipped => "skipped",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadItem {
    pub name: String,
    pub status: UploadStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadQueue {
    pub items: Vec<UploadItem>,
}

impl UploadQueue {
    /// Queue of pending files, in pick order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = names.into_iter().map(|name| UploadItem { name: name.into(), status: UploadStatus::Pending }).collect();
        Self { items }
    }

    /// Index of the next file to send. `None` while one is uploading, after
    /// a failure, or when everything is done.
    pub fn next(&self) -> Option<usize> {
        if self.is_busy() {
            return None;
        }
        self.items.iter().position(|item| item.status == UploadStatus::Pending)
    }

    pub fn start(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            if item.status == UploadStatus::Pending {
                item.status = UploadStatus::Uploading;
            }
        }
    }

    pub fn complete(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.status = UploadStatus::Done;
        }
    }

    /// Record a failure and skip every file still pending.
    pub fn fail(&mut self, index: usize, message: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.status = UploadStatus::Failed(message.into());
        }
        for item in &mut self.items {
            if item.status == UploadStatus::Pending {
                item.status = UploadStatus::Skipped;
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.items.iter().any(|item| item.status == UploadStatus::Uploading)
    }

    pub fn is_finished(&self) -> bool {
        self.items.iter().all(|item| !matches!(item.status, UploadStatus::Pending | UploadStatus::Uploading))
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.status == UploadStatus::Done).count()
    }

    /// Summary line under the file input; `None` before the first pick.
    pub fn progress_label(&self) -> Option<String> {
        let total = self.items.len();
        if total == 0 {
            return None;
        }
        let done = self.done_count();
        if self.is_finished() {
            Some(format!("{done} of {total} uploaded"))
        } else {
            Some(format!("Uploading {} of {total}...", done + 1))
        }
    }

    /// First failure message, if the queue stopped on one.
    pub fn failure(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match &item.status {
            UploadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        })
    }
}
