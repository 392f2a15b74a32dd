//! Media picker session state.
//!
//! The picker is opened for exactly one `MediaTarget`. A confirmed selection
//! is handed back once together with that target and the picker closes, so
//! a late second confirm cannot write into a different slot.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use content::{MediaEntry, MediaPick, MediaTarget};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaPickerState {
    pub target: Option<MediaTarget>,
}

impl MediaPickerState {
    pub fn open(&mut self, target: MediaTarget) {
        self.target = Some(target);
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    /// Resolve a confirmed selection against the open target and close.
    /// `None` when closed or when the selection is empty; an empty
    /// selection leaves the picker open.
    pub fn select(&mut self, entries: &[MediaEntry]) -> Option<(MediaTarget, MediaPick)> {
        let pick = MediaPick::from_selection(entries)?;
        let target = self.target.take()?;
        Some((target, pick))
    }
}

/// Multi-select inside the media grid. Keeps click order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaSelection {
    ids: Vec<String>,
}

impl MediaSelection {
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_owned());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected entries in click order. Ids no longer listed are skipped.
    pub fn chosen(&self, entries: &[MediaEntry]) -> Vec<MediaEntry> {
        self.ids.iter().filter_map(|id| entries.iter().find(|e| &e.id == id).cloned()).collect()
    }
}
