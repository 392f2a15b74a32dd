//! Flat records: partners, carousel slides and titles.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

use crate::fallback::first_present;
use crate::media::ImageSlot;
use crate::profile::NestedImage;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default, deserialize_with = "crate::wire::optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::optional_id")]
    pub image_file_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub image: Option<NestedImage>,
}

impl Partner {
    pub fn resolved_image(&self) -> Option<&str> {
        first_present([self.image_url.as_deref(), self.image.as_ref().and_then(NestedImage::primary_url)])
    }
}

impl ImageSlot for Partner {
    fn set_image(&mut self, url: Option<String>, file_id: Option<String>) {
        self.image_url = url;
        self.image_file_id = file_id;
    }
}

/// One homepage carousel slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselSlide {
    #[serde(default, deserialize_with = "crate::wire::optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "crate::wire::blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::optional_id")]
    pub image_file_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub image: Option<NestedImage>,
}

impl CarouselSlide {
    pub fn resolved_image(&self) -> Option<&str> {
        first_present([self.image_url.as_deref(), self.image.as_ref().and_then(NestedImage::primary_url)])
    }
}

impl ImageSlot for CarouselSlide {
    fn set_image(&mut self, url: Option<String>, file_id: Option<String>) {
        self.image_url = url;
        self.image_file_id = file_id;
    }
}

/// A comitard title ("titre"), ordered by `ordre`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default, deserialize_with = "crate::wire::optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub ordre: Option<i64>,
}

/// Titles sorted by `ordre`, unordered ones last, ties kept in input order.
pub fn titles_by_ordre(titles: &[Title]) -> Vec<Title> {
    let mut sorted = titles.to_vec();
    sorted.sort_by_key(|t| (t.ordre.is_none(), t.ordre));
    sorted
}
