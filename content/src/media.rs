//! Media entries and the picks made from the media picker.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContentError;
use crate::block::BlockId;
use crate::document::SectionId;

/// Asset kind shown in the media grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Classify a server MIME type. Anything that is not an image is a video.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image") { Self::Image } else { Self::Video }
    }
}

/// Named placement slot a media entry can be marked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageTag {
    Hero,
    Contact,
    About,
    Partner,
    Carousel,
}

impl UsageTag {
    pub const ALL: [UsageTag; 5] = [Self::Hero, Self::Contact, Self::About, Self::Partner, Self::Carousel];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Contact => "contact",
            Self::About => "about",
            Self::Partner => "partner",
            Self::Carousel => "carousel",
        }
    }
}

impl FromStr for UsageTag {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ContentError::UnknownUsageTag(s.to_owned()))
    }
}

/// A reference to an uploaded asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    #[serde(deserialize_with = "crate::wire::id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub optimized: bool,
    #[serde(default)]
    pub usage: Option<UsageTag>,
}

impl MediaEntry {
    /// First resolvable URL.
    pub fn primary_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}

/// A file as listed by the backend files endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FileRecord {
    #[serde(deserialize_with = "crate::wire::id")]
    pub id: String,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub optimized: bool,
    #[serde(default)]
    pub usage: Option<String>,
}

impl From<FileRecord> for MediaEntry {
    fn from(file: FileRecord) -> Self {
        Self {
            id: file.id,
            kind: MediaKind::from_mime(file.mime.as_deref().unwrap_or_default()),
            urls: vec![file.url],
            filename: file.filename,
            optimized: file.optimized,
            usage: file.usage.as_deref().and_then(|u| u.parse().ok()),
        }
    }
}

/// Where a media pick lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaTarget {
    /// The article hero image.
    Hero,
    /// The single image of a profile or record.
    ProfileImage,
    /// The value of one image/video block.
    Block { section_id: SectionId, block_id: BlockId },
}

/// What a selection resolves to: the file id and the URL to insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaPick {
    pub file_id: Option<String>,
    pub url: Option<String>,
}

impl MediaPick {
    /// Resolve a selection. Only the first entry's first URL is used.
    pub fn from_selection(entries: &[MediaEntry]) -> Option<Self> {
        let first = entries.first()?;
        Some(Self {
            file_id: Some(first.id.clone()).filter(|id| !id.is_empty()),
            url: first.primary_url().map(str::to_owned),
        })
    }
}

/// A record with one image slot (`image_url` + `image_file_id`).
pub trait ImageSlot: Clone {
    fn set_image(&mut self, url: Option<String>, file_id: Option<String>);

    /// Copy of `self` with the pick applied to the image slot.
    fn with_media(&self, pick: &MediaPick) -> Self {
        let mut next = self.clone();
        next.set_image(pick.url.clone(), pick.file_id.clone());
        next
    }
}
