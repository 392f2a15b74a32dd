//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (local storage, the
//! session lifecycle, page-level fetch hooks) from page and component logic.

pub mod auth;
pub mod media_store;
pub mod resource;
pub mod storage;
