//! Volunteer and comitard profiles, and their link lists.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::fallback::first_present;
use crate::media::ImageSlot;
use crate::records::Title;

// =============================================================================
// LINKS
// =============================================================================

/// A labelled external link on a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub url: String,
}

/// Which half of a link an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkField {
    Label,
    Url,
}

/// Append an empty link.
pub fn add_link(links: &[Link]) -> Vec<Link> {
    let mut next = links.to_vec();
    next.push(Link::default());
    next
}

/// Replace the label or url of the link at `index`.
pub fn update_link(links: &[Link], index: usize, field: LinkField, value: &str) -> Vec<Link> {
    let mut next = links.to_vec();
    if let Some(link) = next.get_mut(index) {
        match field {
            LinkField::Label => link.label = value.to_owned(),
            LinkField::Url => link.url = value.to_owned(),
        }
    }
    next
}

pub fn remove_link(links: &[Link], index: usize) -> Vec<Link> {
    let mut next = links.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

// =============================================================================
// NESTED READ-ONLY OBJECTS
// =============================================================================

/// Image object the backend joins onto a record. Never sent back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NestedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub urls: Vec<String>,
}

impl NestedImage {
    pub fn primary_url(&self) -> Option<&str> {
        first_present([self.url.as_deref(), self.urls.first().map(String::as_str)])
    }
}

/// Title the backend joins onto a comitard. Never sent back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TitreRef {
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub ordre: Option<i64>,
}

/// Up to two uppercase initials, or `fallback` when the name is blank.
pub fn initials(name: &str, fallback: char) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() { fallback.to_string() } else { letters }
}

// =============================================================================
// VOLUNTEER
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

impl VolunteerStatus {
    pub const ALL: [VolunteerStatus; 3] = [Self::Active, Self::Inactive, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Archived => "archived",
        }
    }

    /// Lenient parse for select inputs; unknown values read as active.
    pub fn parse_lenient(s: &str) -> Self {
        Self::ALL.into_iter().find(|v| v.as_str() == s).unwrap_or_default()
    }
}

/// Categories offered by the volunteer editor.
pub const VOLUNTEER_CATEGORIES: [&str; 4] = ["Education", "Environment", "Formation", "Leadership"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(default, deserialize_with = "crate::wire::optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub testimonial: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub links: Vec<Link>,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::optional_id")]
    pub image_file_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub image: Option<NestedImage>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub status: VolunteerStatus,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Volunteer {
    /// Image to show: stored URL, then the joined image object.
    pub fn resolved_image(&self) -> Option<&str> {
        first_present([self.image_url.as_deref(), self.image.as_ref().and_then(NestedImage::primary_url)])
    }

    pub fn initials(&self) -> String {
        initials(&self.name, 'V')
    }
}

impl ImageSlot for Volunteer {
    fn set_image(&mut self, url: Option<String>, file_id: Option<String>) {
        self.image_url = url;
        self.image_file_id = file_id;
    }
}

// =============================================================================
// COMITARD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comitard {
    #[serde(default, deserialize_with = "crate::wire::optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub cv: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub links: Vec<Link>,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::optional_id")]
    pub image_file_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub image: Option<NestedImage>,
    #[serde(default, deserialize_with = "crate::wire::optional_id")]
    pub titre_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub titre: Option<TitreRef>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Comitard {
    pub fn resolved_image(&self) -> Option<&str> {
        first_present([self.image_url.as_deref(), self.image.as_ref().and_then(NestedImage::primary_url)])
    }

    pub fn initials(&self) -> String {
        initials(&self.name, 'C')
    }

    /// Display name of the assigned title.
    ///
    /// Looks the id up in `titles`, falling back to `ID Titre: <id>`.
    /// `None` when no title is assigned.
    pub fn title_label(&self, titles: &[Title]) -> Option<String> {
        let id = self.titre_id.as_deref()?;
        let label = titles
            .iter()
            .find(|t| t.id.as_deref() == Some(id))
            .and_then(|t| first_present([Some(t.name.as_str())]))
            .map_or_else(|| format!("ID Titre: {id}"), str::to_owned);
        Some(label)
    }
}

impl ImageSlot for Comitard {
    fn set_image(&mut self, url: Option<String>, file_id: Option<String>) {
        self.image_url = url;
        self.image_file_id = file_id;
    }
}
