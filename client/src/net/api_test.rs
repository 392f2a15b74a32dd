use serde_json::json;

use super::*;

// =============================================================
// ApiConfig
// =============================================================

#[test]
fn api_config_defaults_without_meta() {
    assert_eq!(ApiConfig::from_meta(None).base_url, DEFAULT_API_URL);
    assert_eq!(ApiConfig::from_meta(Some("  ")).base_url, DEFAULT_API_URL);
}

#[test]
fn api_config_trims_trailing_slash() {
    let cfg = ApiConfig::from_meta(Some("https://example.test/api/"));
    assert_eq!(cfg.base_url, "https://example.test/api");
}

#[test]
fn api_config_joins_paths_with_one_slash() {
    let cfg = ApiConfig::from_meta(Some("https://example.test/api"));
    assert_eq!(cfg.url("/articles"), "https://example.test/api/articles");
    assert_eq!(cfg.url("files/3"), "https://example.test/api/files/3");
}

#[test]
fn api_config_from_document_outside_browser_is_default() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}

// =============================================================
// Paths
// =============================================================

#[test]
fn collection_and_item_paths() {
    assert_eq!(collection_path(Collection::Titre), "/titre");
    assert_eq!(item_path(Collection::Volunteers, "12"), "/volunteers/12");
    assert_eq!(file_path("f1"), "/files/f1");
}

#[test]
fn upload_path_scopes_to_article() {
    assert_eq!(upload_path(Some("a1")), "/articles/a1/files");
    assert_eq!(upload_path(None), "/files");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn error_message_prefers_error_then_message() {
    assert_eq!(error_message(&json!({ "error": "Bad slug", "message": "ignored" })), "Bad slug");
    assert_eq!(error_message(&json!({ "message": "Not found" })), "Not found");
    assert_eq!(error_message(&json!({ "error": "" })), "Unexpected error");
    assert_eq!(error_message(&Value::Null), "Unexpected error");
}

#[test]
fn status_error_maps_401_to_unauthorized() {
    assert_eq!(status_error(401, &json!({ "error": "expired" })), ApiError::Unauthorized);
}

#[test]
fn status_error_keeps_status_and_message() {
    let err = status_error(422, &json!({ "message": "title required" }));
    assert_eq!(err, ApiError::Status { status: 422, message: "title required".to_owned() });
    assert_eq!(err.to_string(), "title required");
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let cfg = ApiConfig::default();
    assert_eq!(block_on(list::<content::Title>(&cfg)), Err(ApiError::Unavailable));
    assert_eq!(block_on(current_user(&cfg)), Err(ApiError::Unavailable));
    assert_eq!(block_on(delete_file(&cfg, "f1")), Err(ApiError::Unavailable));
}
