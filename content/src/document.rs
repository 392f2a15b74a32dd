//! Article documents: sections of ordered, typed blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The article editor holds one `Document` in a signal. Every form input and
//! drag gesture maps to one operation here, and the result replaces the
//! signal value. The same value is serialized as the create/update body.
//!
//! DESIGN
//! ======
//! Operations never fail. Unknown section or block ids and out-of-range
//! indices return an unchanged copy, so a stale event from an earlier render
//! cannot corrupt the tree.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ContentError;
use crate::block::{Block, BlockContent, BlockId, BlockKind, normalize_rich_text};
use crate::media::{MediaPick, MediaTarget};
use crate::reorder;
use crate::slug::slugify;
use crate::wire::coalesce;

const DEFAULT_LANGUAGE: &str = "fr";

/// Categories offered by the article editor.
pub const ARTICLE_CATEGORIES: [&str; 3] = ["LaSTAR", "CCI Invest", "CCI Social"];

/// Opaque section identifier, unique within a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::wire::id(deserializer).map(Self)
    }
}

impl SectionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled, ordered group of blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub blocks: Vec<Block>,
}

impl Section {
    fn empty(id: SectionId) -> Self {
        Self { id, title: String::new(), blocks: Vec::new() }
    }

    fn block_mut(&mut self, block_id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| &b.id == block_id)
    }
}

/// Publication status of an article.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Published,
    Archived,
}

impl Status {
    pub const ALL: [Status; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for Status {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ContentError::UnknownStatus(s.to_owned()))
    }
}

/// One top-level scalar field with its new value, as entered in a form.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentField {
    Title(String),
    Subtitle(String),
    Excerpt(String),
    Category(String),
    Slug(String),
    Language(String),
    HeroUrl(String),
    AuthorName(String),
    ReadingTime(Option<u32>),
    Featured(bool),
    Status(Status),
    PublishedAt(String),
}

/// An editable article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "crate::wire::optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub slug: String,
    #[serde(default = "default_language", deserialize_with = "language")]
    pub language: String,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub hero_url: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::optional_id")]
    pub hero_file_id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub author_name: Option<String>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub status: Status,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub meta: Map<String, Value>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub sections: Vec<Section>,
    #[serde(default = "default_version", deserialize_with = "version")]
    pub version: u32,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

fn default_version() -> u32 {
    1
}

fn language<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.and_then(coalesce).unwrap_or_else(default_language))
}

fn version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_version))
}

impl Default for Document {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: None,
            excerpt: None,
            category: None,
            slug: String::new(),
            language: default_language(),
            hero_url: None,
            hero_file_id: None,
            author_name: None,
            reading_time: None,
            featured: false,
            status: Status::Draft,
            published_at: None,
            meta: Map::new(),
            tags: Vec::new(),
            sections: Vec::new(),
            version: default_version(),
        }
    }
}

impl Document {
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Replace one scalar field. Blank optional text becomes `None`.
    pub fn set_field(&self, field: DocumentField) -> Self {
        let mut next = self.clone();
        match field {
            DocumentField::Title(v) => next.title = v,
            DocumentField::Subtitle(v) => next.subtitle = coalesce(v),
            DocumentField::Excerpt(v) => next.excerpt = coalesce(v),
            DocumentField::Category(v) => next.category = coalesce(v),
            DocumentField::Slug(v) => next.slug = v,
            DocumentField::Language(v) => next.language = coalesce(v).unwrap_or_else(default_language),
            DocumentField::HeroUrl(v) => {
                next.hero_url = coalesce(v);
                if next.hero_url.is_none() {
                    next.hero_file_id = None;
                }
            }
            DocumentField::AuthorName(v) => next.author_name = coalesce(v),
            DocumentField::ReadingTime(v) => next.reading_time = v,
            DocumentField::Featured(v) => next.featured = v,
            DocumentField::Status(v) => next.status = v,
            DocumentField::PublishedAt(v) => next.published_at = coalesce(v),
        }
        next
    }

    /// Append an empty section with a fresh id.
    pub fn add_section(&self) -> Self {
        self.add_section_with_id(SectionId::new())
    }

    /// Append an empty section with a caller-chosen id. A duplicate id is a no-op.
    pub fn add_section_with_id(&self, id: SectionId) -> Self {
        let mut next = self.clone();
        if next.section(&id).is_none() {
            next.sections.push(Section::empty(id));
        }
        next
    }

    pub fn rename_section(&self, id: &SectionId, title: &str) -> Self {
        self.map_section(id, |section| section.title = title.to_owned())
    }

    pub fn remove_section(&self, id: &SectionId) -> Self {
        let mut next = self.clone();
        next.sections.retain(|s| &s.id != id);
        next
    }

    /// Move the section at `from` to `to`.
    pub fn reorder_sections(&self, from: usize, to: usize) -> Self {
        let mut next = self.clone();
        next.sections = reorder::move_index(&self.sections, from, to);
        next
    }

    /// Apply a drag-end event: `dragged` dropped over `over`.
    pub fn move_section(&self, dragged: &SectionId, over: Option<&SectionId>) -> Self {
        match reorder::resolve_drop(&self.section_ids(), dragged, over) {
            Some((from, to)) => self.reorder_sections(from, to),
            None => self.clone(),
        }
    }

    /// Append an empty block of `kind` with a fresh id.
    pub fn add_block(&self, section_id: &SectionId, kind: BlockKind) -> Self {
        self.add_block_with_id(section_id, BlockId::new(), kind)
    }

    pub fn add_block_with_id(&self, section_id: &SectionId, block_id: BlockId, kind: BlockKind) -> Self {
        self.map_section(section_id, |section| {
            if section.block_mut(&block_id).is_none() {
                section.blocks.push(Block::with_id(block_id, kind));
            }
        })
    }

    /// Replace a block's value. Markup kinds are normalized first.
    pub fn update_block(&self, section_id: &SectionId, block_id: &BlockId, value: &str) -> Self {
        self.map_section(section_id, |section| {
            if let Some(block) = section.block_mut(block_id) {
                block.content = match block.content.kind() {
                    Some(kind) if !kind.is_media() => block.content.with_value(&normalize_rich_text(value)),
                    _ => block.content.with_value(value),
                };
            }
        })
    }

    pub fn remove_block(&self, section_id: &SectionId, block_id: &BlockId) -> Self {
        self.map_section(section_id, |section| section.blocks.retain(|b| &b.id != block_id))
    }

    /// Append a tag. Blank and duplicate tags are ignored.
    pub fn add_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        let tag = tag.trim();
        if !tag.is_empty() && !next.tags.iter().any(|t| t == tag) {
            next.tags.push(tag.to_owned());
        }
        next
    }

    pub fn remove_tag(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.tags.len() {
            next.tags.remove(index);
        }
        next
    }

    /// Stamp the author. A blank name leaves the current author in place.
    pub fn with_author(&self, name: &str) -> Self {
        let mut next = self.clone();
        if let Some(name) = coalesce(name.to_owned()) {
            next.author_name = Some(name);
        }
        next
    }

    /// Copy with `slug` derived from the title, ready to save.
    pub fn with_derived_slug(&self) -> Self {
        let mut next = self.clone();
        next.slug = slugify(&self.title);
        next
    }

    /// Insert a media pick at `target`.
    ///
    /// `ProfileImage` does not apply to articles and is a no-op.
    pub fn apply_media(&self, target: &MediaTarget, pick: &MediaPick) -> Self {
        match target {
            MediaTarget::Hero => {
                let mut next = self.clone();
                next.hero_url = pick.url.clone();
                next.hero_file_id = pick.file_id.clone();
                next
            }
            MediaTarget::Block { section_id, block_id } => {
                let url = pick.url.as_deref().unwrap_or_default();
                self.map_section(section_id, |section| {
                    if let Some(block) = section.block_mut(block_id) {
                        block.content = block.content.with_value(url);
                    }
                })
            }
            MediaTarget::ProfileImage => self.clone(),
        }
    }

    /// Number of blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }

    /// Value of a block, if both ids resolve.
    pub fn block(&self, section_id: &SectionId, block_id: &BlockId) -> Option<&BlockContent> {
        self.section(section_id)?.blocks.iter().find(|b| &b.id == block_id).map(|b| &b.content)
    }

    fn map_section(&self, id: &SectionId, f: impl FnOnce(&mut Section)) -> Self {
        let mut next = self.clone();
        if let Some(section) = next.sections.iter_mut().find(|s| &s.id == id) {
            f(section);
        }
        next
    }
}
