//! REST API helpers for the external CCI backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the
//! backend is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Error bodies are read as
//! `error`, then `message`, then a generic fallback. A 401 clears the stored
//! token before the error reaches the caller, so the next render sees a
//! signed-out session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use content::FileRecord;
use content::{MediaEntry, UsageTag};

use super::types::{Collection, LoginResponse, Resource, User};
#[cfg(feature = "hydrate")]
use super::types::{FileUsagePatch, LoginRequest};

pub const DEFAULT_API_URL: &str = "https://capbio.bi/cci/api";
pub const API_URL_META: &str = "cci-api-url";
const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Failure of one backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("session expired, sign in again")]
    Unauthorized,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Backend location, provided as context by `App`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Config from the shell's `<meta name="cci-api-url">` content.
    pub fn from_meta(content: Option<&str>) -> Self {
        match content.map(|c| c.trim().trim_end_matches('/')).filter(|c| !c.is_empty()) {
            Some(base) => Self { base_url: base.to_owned() },
            None => Self::default(),
        }
    }

    /// Read the meta tag from the live document.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{API_URL_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::from_meta(content.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_path(collection: Collection) -> String {
    format!("/{}", collection.path())
}

#[cfg(any(test, feature = "hydrate"))]
fn item_path(collection: Collection, id: &str) -> String {
    format!("/{}/{id}", collection.path())
}

#[cfg(any(test, feature = "hydrate"))]
fn file_path(id: &str) -> String {
    format!("/files/{id}")
}

/// Upload target: scoped to an article when one is given.
#[cfg(any(test, feature = "hydrate"))]
fn upload_path(article_id: Option<&str>) -> String {
    match article_id {
        Some(id) => format!("/articles/{id}/files"),
        None => "/files".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// User-facing message from an error body.
pub fn error_message(body: &Value) -> String {
    ["error", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str).filter(|m| !m.trim().is_empty()))
        .unwrap_or(UNEXPECTED_ERROR)
        .to_owned()
}

/// Map a non-success status and its body to an error.
pub fn status_error(status: u16, body: &Value) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status { status, message: error_message(body) }
    }
}

// =============================================================================
// TRANSPORT (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

#[cfg(feature = "hydrate")]
fn network(e: impl std::fmt::Display) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn builder(cfg: &ApiConfig, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = cfg.url(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    match crate::util::storage::load_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);
    let err = status_error(status, &body);
    if err == ApiError::Unauthorized {
        crate::util::storage::clear_token();
    }
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn send<B: Serialize>(
    cfg: &ApiConfig,
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    let builder = builder(cfg, verb, path);
    let resp = match body {
        Some(body) => builder.json(body).map_err(network)?.send().await,
        None => builder.send().await,
    }
    .map_err(network)?;
    check(resp).await
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: DeserializeOwned, B: Serialize>(
    cfg: &ApiConfig,
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    let resp = send(cfg, verb, path, body).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// COLLECTIONS
// =============================================================================

/// `GET /{collection}`.
pub async fn list<T: Resource>(cfg: &ApiConfig) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(cfg, Verb::Get, &collection_path(T::COLLECTION), None::<&()>).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
        Err(ApiError::Unavailable)
    }
}

/// `GET /{collection}/{id}`.
pub async fn get<T: Resource>(cfg: &ApiConfig, id: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(cfg, Verb::Get, &item_path(T::COLLECTION, id), None::<&()>).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, id);
        Err(ApiError::Unavailable)
    }
}

/// `POST /{collection}`.
pub async fn create<T: Resource>(cfg: &ApiConfig, record: &T) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(cfg, Verb::Post, &collection_path(T::COLLECTION), Some(record)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, record);
        Err(ApiError::Unavailable)
    }
}

/// `PATCH /{collection}/{id}`.
pub async fn update<T: Resource>(cfg: &ApiConfig, id: &str, record: &T) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(cfg, Verb::Patch, &item_path(T::COLLECTION, id), Some(record)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, id, record);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /{collection}/{id}`.
pub async fn delete(cfg: &ApiConfig, collection: Collection, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(cfg, Verb::Delete, &item_path(collection, id), None::<&()>).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, collection, id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// FILES
// =============================================================================

/// `GET /files`, mapped to media entries.
pub async fn list_files(cfg: &ApiConfig) -> Result<Vec<MediaEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let files: Vec<FileRecord> = fetch_json(cfg, Verb::Get, "/files", None::<&()>).await?;
        Ok(files.into_iter().map(MediaEntry::from).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
        Err(ApiError::Unavailable)
    }
}

/// `PATCH /files/{id}` with `{ "usage": tag-or-null }`.
pub async fn set_file_usage(cfg: &ApiConfig, id: &str, usage: Option<UsageTag>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = FileUsagePatch { usage };
        send(cfg, Verb::Patch, &file_path(id), Some(&body)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, id, usage);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /files/{id}`.
pub async fn delete_file(cfg: &ApiConfig, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(cfg, Verb::Delete, &file_path(id), None::<&()>).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, id);
        Err(ApiError::Unavailable)
    }
}

/// Upload one file as multipart field `files`. Returns the raw response
/// body; `UploadInfo::from_response` reads it.
#[cfg(feature = "hydrate")]
pub async fn upload_file(cfg: &ApiConfig, article_id: Option<&str>, file: &web_sys::File) -> Result<Value, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("cannot build form data".to_owned()))?;
    form.append_with_blob_and_filename("files", file, &file.name())
        .map_err(|_| ApiError::Network("cannot attach file".to_owned()))?;
    let resp = builder(cfg, Verb::Post, &upload_path(article_id))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let resp = check(resp).await?;
    resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /user/login`.
pub async fn login(cfg: &ApiConfig, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        fetch_json(cfg, Verb::Post, "/user/login", Some(&body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, email, password);
        Err(ApiError::Unavailable)
    }
}

/// `GET /user/me` with the stored token.
pub async fn current_user(cfg: &ApiConfig) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(cfg, Verb::Get, "/user/me", None::<&()>).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
        Err(ApiError::Unavailable)
    }
}
