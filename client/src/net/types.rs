//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Editable records live in the `content` crate. This module adds the bits
//! only the transport needs: collection routing (`Resource`), auth payloads,
//! and the loose shapes of upload responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use content::wire::value_to_id;
use content::{CarouselSlide, Comitard, Document, MediaEntry, MediaKind, Partner, Title, UsageTag, Volunteer};

/// Backend collections addressed as `/{collection}` and `/{collection}/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Articles,
    Volunteers,
    Partner,
    Carousel,
    Titre,
    Comitard,
}

impl Collection {
    pub const ALL: [Collection; 6] =
        [Self::Articles, Self::Volunteers, Self::Partner, Self::Carousel, Self::Titre, Self::Comitard];

    /// Backend path segment.
    pub fn path(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Volunteers => "volunteers",
            Self::Partner => "partner",
            Self::Carousel => "carousel",
            Self::Titre => "titre",
            Self::Comitard => "comitard",
        }
    }

    /// Console route prefix for the list page.
    pub fn route(self) -> &'static str {
        match self {
            Self::Articles => "/articles",
            Self::Volunteers => "/volunteers",
            Self::Partner => "/partners",
            Self::Carousel => "/carousel",
            Self::Titre => "/titles",
            Self::Comitard => "/comitards",
        }
    }

    /// Plural label for headings and the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Articles => "Articles",
            Self::Volunteers => "Volunteers",
            Self::Partner => "Partners",
            Self::Carousel => "Carousel",
            Self::Titre => "Titles",
            Self::Comitard => "Comitards",
        }
    }

    /// Singular label for "Create X" / "Edit X".
    pub fn singular(self) -> &'static str {
        match self {
            Self::Articles => "Article",
            Self::Volunteers => "Volunteer",
            Self::Partner => "Partner",
            Self::Carousel => "Slide",
            Self::Titre => "Title",
            Self::Comitard => "Comitard",
        }
    }

    pub fn new_route(self) -> String {
        format!("{}/new", self.route())
    }

    pub fn edit_route(self, id: &str) -> String {
        format!("{}/{id}/edit", self.route())
    }
}

/// A record stored in one backend collection.
pub trait Resource: Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// Backend identifier, absent until created.
    fn id(&self) -> Option<&str>;
}

macro_rules! resource {
    ($ty:ty, $collection:expr) => {
        impl Resource for $ty {
            const COLLECTION: Collection = $collection;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }
    };
}

resource!(Document, Collection::Articles);
resource!(Volunteer, Collection::Volunteers);
resource!(Partner, Collection::Partner);
resource!(CarouselSlide, Collection::Carousel);
resource!(Title, Collection::Titre);
resource!(Comitard, Collection::Comitard);

/// The signed-in account as returned by `/user/me` and `/user/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "content::wire::optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Name stamped on articles: the account name, else the email.
    pub fn display_name(&self) -> Option<&str> {
        content::fallback::first_present([self.name.as_deref(), self.email.as_deref()])
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `PATCH /files/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileUsagePatch {
    pub usage: Option<UsageTag>,
}

/// File description pulled out of an upload response.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadInfo {
    pub id: Option<String>,
    pub url: String,
    pub filename: Option<String>,
    pub optimized: bool,
}

impl UploadInfo {
    /// Read the first described file: `details[0]`, else `files[0]`, else
    /// `urls[0]`. `None` when the response carries none of them.
    pub fn from_response(body: &Value) -> Option<Self> {
        let first = |key: &str| body.get(key).and_then(Value::as_array).and_then(|items| items.first());
        if let Some(info) = first("details").or_else(|| first("files")).and_then(Self::from_object) {
            return Some(info);
        }
        let url = first("urls")?.as_str()?;
        Some(Self { id: None, url: url.to_owned(), filename: None, optimized: false })
    }

    fn from_object(value: &Value) -> Option<Self> {
        let url = value.get("url")?.as_str()?.to_owned();
        let id = value.get("id").cloned().and_then(value_to_id);
        Some(Self {
            id,
            url,
            filename: value.get("filename").and_then(Value::as_str).map(str::to_owned),
            optimized: value.get("optimized").and_then(Value::as_bool).unwrap_or(false),
        })
    }

    /// Media entry for the local store. Falls back to the picked file's
    /// name and a fresh id when the server omitted them.
    pub fn into_entry(self, file_name: &str, mime: &str) -> MediaEntry {
        MediaEntry {
            id: self.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            kind: MediaKind::from_mime(mime),
            urls: vec![self.url],
            filename: Some(self.filename.unwrap_or_else(|| file_name.to_owned())),
            optimized: self.optimized,
            usage: None,
        }
    }
}
