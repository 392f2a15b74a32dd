//! Networking modules for the external REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and error mapping, and `types` defines the
//! transport-only DTOs plus the `Resource` binding of content records to
//! backend collections.

pub mod api;
pub mod types;
