//! Typed content blocks.
//!
//! On the wire a block is `{"id", "type", "value"}` where the meaning of
//! `value` depends on `type`. Here the pair is a sum type so every render and
//! edit site matches the full kind set.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ContentError;

/// Opaque block identifier, unique within a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of block kinds an editor can add.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Subtitle,
    Quote,
    Image,
    Video,
}

impl BlockKind {
    /// Kinds in the order the "add block" bar offers them.
    pub const ALL: [BlockKind; 5] = [Self::Text, Self::Subtitle, Self::Image, Self::Video, Self::Quote];

    /// Wire name used in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Subtitle => "subtitle",
            Self::Quote => "quote",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Human label for buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Subtitle => "Subtitle",
            Self::Quote => "Quote",
            Self::Image => "Image",
            Self::Video => "Video",
        }
    }

    /// Whether the block value is a media URL rather than markup.
    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

impl FromStr for BlockKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "subtitle" => Ok(Self::Subtitle),
            "quote" => Ok(Self::Quote),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(ContentError::UnknownBlockKind(other.to_owned())),
        }
    }
}

/// Block payload keyed by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockContent {
    /// Rich-text paragraph markup.
    Text(String),
    /// Rich-text subheading markup.
    Subtitle(String),
    /// Rich-text quotation markup.
    Quote(String),
    /// Image source URL.
    Image(String),
    /// Embeddable video URL.
    Video(String),
    /// A kind this build does not know. Kept verbatim so saving does not lose it.
    Unknown { kind: String, value: Value },
}

impl BlockContent {
    /// Empty payload for a newly added block.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => Self::Text(String::new()),
            BlockKind::Subtitle => Self::Subtitle(String::new()),
            BlockKind::Quote => Self::Quote(String::new()),
            BlockKind::Image => Self::Image(String::new()),
            BlockKind::Video => Self::Video(String::new()),
        }
    }

    /// Known kind of this payload, `None` for unknown kinds.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Self::Text(_) => Some(BlockKind::Text),
            Self::Subtitle(_) => Some(BlockKind::Subtitle),
            Self::Quote(_) => Some(BlockKind::Quote),
            Self::Image(_) => Some(BlockKind::Image),
            Self::Video(_) => Some(BlockKind::Video),
            Self::Unknown { .. } => None,
        }
    }

    /// Wire `type` string.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unknown { kind, .. } => kind.as_str(),
            known => known.kind().map_or("", BlockKind::as_str),
        }
    }

    /// Current value as text. Unknown non-string values read as empty.
    pub fn value(&self) -> &str {
        match self {
            Self::Text(v) | Self::Subtitle(v) | Self::Quote(v) | Self::Image(v) | Self::Video(v) => v.as_str(),
            Self::Unknown { value, .. } => value.as_str().unwrap_or(""),
        }
    }

    /// Same kind with a replaced value.
    pub fn with_value(&self, value: &str) -> Self {
        let value = value.to_owned();
        match self {
            Self::Text(_) => Self::Text(value),
            Self::Subtitle(_) => Self::Subtitle(value),
            Self::Quote(_) => Self::Quote(value),
            Self::Image(_) => Self::Image(value),
            Self::Video(_) => Self::Video(value),
            Self::Unknown { kind, .. } => Self::Unknown { kind: kind.clone(), value: Value::String(value) },
        }
    }

    fn from_wire(kind: String, value: Value) -> Self {
        let Ok(known) = kind.parse::<BlockKind>() else {
            return Self::Unknown { kind, value };
        };
        let text = match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        };
        Self::empty(known).with_value(&text)
    }

    fn into_wire(self) -> (String, Value) {
        match self {
            Self::Unknown { kind, value } => (kind, value),
            known => {
                let kind = known.type_name().to_owned();
                (kind, Value::String(known.value().to_owned()))
            }
        }
    }
}

/// A single typed content unit within a section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireBlock", into = "WireBlock")]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
}

impl Block {
    /// New empty block of `kind` with a fresh id.
    pub fn new(kind: BlockKind) -> Self {
        Self::with_id(BlockId::new(), kind)
    }

    pub fn with_id(id: BlockId, kind: BlockKind) -> Self {
        Self { id, content: BlockContent::empty(kind) }
    }
}

#[derive(Serialize, Deserialize)]
struct WireBlock {
    #[serde(deserialize_with = "crate::wire::id")]
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Value,
}

impl From<WireBlock> for Block {
    fn from(wire: WireBlock) -> Self {
        Self { id: BlockId(wire.id), content: BlockContent::from_wire(wire.kind, wire.value) }
    }
}

impl From<Block> for WireBlock {
    fn from(block: Block) -> Self {
        let (kind, value) = block.content.into_wire();
        Self { id: block.id.0, kind, value }
    }
}

/// Normalize rich-text editor output before storing it.
///
/// Editors emit `&nbsp;` for typed spaces; stored markup uses plain spaces.
pub fn normalize_rich_text(raw: &str) -> String {
    raw.replace("&nbsp;", " ")
}
