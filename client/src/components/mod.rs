//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome, form controls, the block editor, media
//! tools and preview panes. Shared state comes from Leptos context
//! providers; record state is passed in by the owning page.

pub mod article_preview;
pub mod collection_table;
pub mod confirm_dialog;
pub mod editor_status;
pub mod form_fields;
pub mod image_field;
pub mod layout;
pub mod links_editor;
pub mod list_status;
pub mod media_grid;
pub mod media_picker;
pub mod media_uploader;
pub mod notice_bar;
pub mod preview_dialog;
pub mod profile_preview;
pub mod rich_text;
pub mod section_editor;
pub mod sidebar;
