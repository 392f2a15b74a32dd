//! Local media store.
//!
//! Every upload is also recorded in `localStorage` so the picker still has
//! something to offer when `GET /files` fails. Entries are kept newest
//! first, unique by id.

#[cfg(test)]
#[path = "media_store_test.rs"]
mod media_store_test;

use content::MediaEntry;

use super::storage::{load_json, save_json};

pub const MEDIA_STORE_KEY: &str = "cci_admin_media_v1";

/// Put `entry` at the front, replacing any older entry with the same id.
pub fn prepend(entries: &[MediaEntry], entry: MediaEntry) -> Vec<MediaEntry> {
    let mut next = Vec::with_capacity(entries.len() + 1);
    let id = entry.id.clone();
    next.push(entry);
    next.extend(entries.iter().filter(|e| e.id != id).cloned());
    next
}

pub fn without(entries: &[MediaEntry], id: &str) -> Vec<MediaEntry> {
    entries.iter().filter(|e| e.id != id).cloned().collect()
}

pub fn load() -> Vec<MediaEntry> {
    load_json(MEDIA_STORE_KEY).unwrap_or_default()
}

/// Record a fresh upload.
pub fn add(entry: MediaEntry) {
    save_json(MEDIA_STORE_KEY, &prepend(&load(), entry));
}

pub fn remove(id: &str) {
    save_json(MEDIA_STORE_KEY, &without(&load(), id));
}
