//! Shared content model for the CCI admin console.
//!
//! This crate owns the editable records (articles, profiles, slides, titles)
//! and every structural operation the editors perform on them. It has no
//! browser dependencies so the editing rules can be tested natively.
//!
//! DESIGN
//! ======
//! Editing operations take `&self` and return a new value. A view holding an
//! earlier snapshot never observes a later edit.

pub mod block;
pub mod document;
pub mod fallback;
pub mod media;
pub mod preview;
pub mod profile;
pub mod records;
pub mod reorder;
pub mod slug;
pub mod wire;

pub use block::{Block, BlockContent, BlockId, BlockKind};
pub use document::{Document, DocumentField, Section, SectionId, Status};
pub use media::{FileRecord, ImageSlot, MediaEntry, MediaKind, MediaPick, MediaTarget, UsageTag};
pub use profile::{Comitard, Link, LinkField, NestedImage, TitreRef, Volunteer, VolunteerStatus};
pub use records::{CarouselSlide, Partner, Title};
pub use slug::slugify;

/// Error returned when parsing closed-set values from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// The string does not name a known block kind.
    #[error("unknown block kind: {0}")]
    UnknownBlockKind(String),
    /// The string does not name a known article status.
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    /// The string does not name a known media usage tag.
    #[error("unknown usage tag: {0}")]
    UnknownUsageTag(String),
}
