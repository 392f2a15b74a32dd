//! Preview plans for the live preview panes.
//!
//! A plan is the list of things a preview pane shows, with every omission
//! rule already applied. The Leptos components only map plan items to
//! markup, so the rules stay testable without a browser.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::block::{BlockContent, BlockId};
use crate::document::{Document, SectionId};
use crate::fallback::present;
use crate::profile::{Comitard, Volunteer};
use crate::records::Title;

/// Markup block flavour, mapped to `div`, `h4` or `blockquote`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupStyle {
    Paragraph,
    Subheading,
    Quote,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewBlock {
    /// Trusted rich-text markup, rendered as inner HTML.
    Markup { id: BlockId, style: MarkupStyle, html: String },
    Image { id: BlockId, url: String },
    Video { id: BlockId, url: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionPreview {
    pub id: SectionId,
    pub title: Option<String>,
    pub blocks: Vec<PreviewBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticlePreview {
    pub category: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub hero_url: Option<String>,
    pub excerpt: Option<String>,
    /// Empty means no tag row.
    pub tags: Vec<String>,
    pub sections: Vec<SectionPreview>,
}

fn owned(value: Option<&str>) -> Option<String> {
    present(value).map(str::to_owned)
}

fn preview_block(id: &BlockId, content: &BlockContent) -> Option<PreviewBlock> {
    let id = id.clone();
    match content {
        BlockContent::Text(html) => Some(PreviewBlock::Markup { id, style: MarkupStyle::Paragraph, html: html.clone() }),
        BlockContent::Subtitle(html) => Some(PreviewBlock::Markup { id, style: MarkupStyle::Subheading, html: html.clone() }),
        BlockContent::Quote(html) => Some(PreviewBlock::Markup { id, style: MarkupStyle::Quote, html: html.clone() }),
        BlockContent::Image(url) => owned(Some(url.as_str())).map(|url| PreviewBlock::Image { id, url }),
        BlockContent::Video(url) => owned(Some(url.as_str())).map(|url| PreviewBlock::Video { id, url }),
        BlockContent::Unknown { .. } => None,
    }
}

/// Build the article preview plan.
pub fn article_preview(doc: &Document) -> ArticlePreview {
    ArticlePreview {
        category: owned(doc.category.as_deref()),
        title: owned(Some(doc.title.as_str())),
        subtitle: owned(doc.subtitle.as_deref()),
        hero_url: owned(doc.hero_url.as_deref()),
        excerpt: owned(doc.excerpt.as_deref()),
        tags: doc.tags.clone(),
        sections: doc
            .sections
            .iter()
            .map(|section| SectionPreview {
                id: section.id.clone(),
                title: owned(Some(section.title.as_str())),
                blocks: section.blocks.iter().filter_map(|b| preview_block(&b.id, &b.content)).collect(),
            })
            .collect(),
    }
}

/// Round avatar: an image, or initials when none resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initials(String),
}

/// Plan for the volunteer and comitard preview cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfilePreview {
    pub avatar: Avatar,
    pub name: String,
    /// Role (volunteer) or title label (comitard).
    pub heading: Option<String>,
    pub category: Option<String>,
    /// Volunteer status badge; comitards have none.
    pub status: Option<&'static str>,
    pub featured: bool,
    /// Bio or CV markup.
    pub body_html: Option<String>,
    pub testimonial: Option<String>,
    pub order: Option<i64>,
}

/// Image when one resolves, initials otherwise.
pub fn avatar(image: Option<&str>, initials: String) -> Avatar {
    match present(image) {
        Some(url) => Avatar::Image(url.to_owned()),
        None => Avatar::Initials(initials),
    }
}

pub fn volunteer_preview(volunteer: &Volunteer) -> ProfilePreview {
    ProfilePreview {
        avatar: avatar(volunteer.resolved_image(), volunteer.initials()),
        name: volunteer.name.clone(),
        heading: owned(Some(volunteer.role.as_str())),
        category: owned(volunteer.category.as_deref()),
        status: Some(volunteer.status.as_str()),
        featured: volunteer.featured,
        body_html: owned(Some(volunteer.bio.as_str())),
        testimonial: owned(Some(volunteer.testimonial.as_str())),
        order: volunteer.order,
    }
}

/// Placeholder heading for a comitard with no name yet.
pub const COMITARD_NAME_PLACEHOLDER: &str = "Nom du Comitard";

pub fn comitard_preview(comitard: &Comitard, titles: &[Title]) -> ProfilePreview {
    ProfilePreview {
        avatar: avatar(comitard.resolved_image(), comitard.initials()),
        name: owned(Some(comitard.name.as_str())).unwrap_or_else(|| COMITARD_NAME_PLACEHOLDER.to_owned()),
        heading: comitard.title_label(titles),
        category: None,
        status: None,
        featured: comitard.featured,
        body_html: owned(Some(comitard.cv.as_str())),
        testimonial: None,
        order: comitard.order,
    }
}
