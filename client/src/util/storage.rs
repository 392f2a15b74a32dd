//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token and the local media store both live in `localStorage`.
//! These helpers centralize the hydrate-only web-sys glue; on the server they
//! read nothing and write nothing.

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the stored bearer token, ignoring blank values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: serde::Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
