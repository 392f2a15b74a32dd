//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `editor`, `lists`, etc.) so individual
//! components can depend on small focused models. None of these types touch
//! the browser; pages wrap them in signals.

pub mod auth;
pub mod editor;
pub mod lists;
pub mod media;
pub mod notice;
pub mod preview;
pub mod sections;
pub mod upload;
