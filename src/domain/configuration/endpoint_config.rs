//! Completion endpoint location and credential.

use url::Url;

use crate::domain::AppError;

pub const BASE_URL_ENV: &str = "LLAMA_BASE_URL";
pub const API_KEY_ENV: &str = "LLAMA_API_KEY";

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Where to send completion requests and how to authenticate.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl EndpointConfig {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, AppError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AppError::config_error(format!("{API_KEY_ENV} must not be empty")));
        }

        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::config_error(format!("{BASE_URL_ENV} is not a valid URL ({base_url}): {e}"))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "{BASE_URL_ENV} must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        Ok(Self { base_url, api_key })
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()).ok_or_else(|| {
            AppError::config_error(format!("{BASE_URL_ENV} environment variable not set"))
        })?;
        let api_key = lookup(API_KEY_ENV).filter(|v| !v.is_empty()).ok_or_else(|| {
            AppError::config_error(format!("{API_KEY_ENV} environment variable not set"))
        })?;

        Self::new(&base_url, api_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `{base_url}/chat/completions`, with or without a trailing slash on the base.
    pub fn completions_url(&self) -> Result<Url, AppError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(CHAT_COMPLETIONS_PATH).map_err(|e| {
            AppError::config_error(format!("Failed to build completions URL: {e}"))
        })
    }
}
