//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Collection pages come in pairs: a list page and an
//! editor page shared by the `new` and `:id/edit` routes.

pub mod articles;
pub mod carousel;
pub mod comitards;
pub mod dashboard;
pub mod login;
pub mod media_library;
pub mod partners;
pub mod titles;
pub mod volunteers;
