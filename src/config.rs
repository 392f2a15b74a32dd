//! Host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://capbio.bi/cci/api";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// REST backend base URL handed to the browser, without a trailing `/`.
    pub api_url: String,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CCI_API_URL`: default `https://capbio.bi/cci/api`
    /// - `SITE_ROOT`: directory holding the compiled `pkg/` assets
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_url = non_blank(lookup("CCI_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if api_url.is_empty() {
            return Err(ConfigError::Invalid { var: "CCI_API_URL", value: api_url });
        }
        let site_root = non_blank(lookup("SITE_ROOT")).map(PathBuf::from);

        Ok(Self { port, api_url, site_root })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
