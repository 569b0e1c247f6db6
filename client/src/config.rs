//! # Client Configuration
//!
//! [`ApiConfig`] is loaded from environment variables. The backend base URL
//! depends on where the client runs:
//!
//! | Context | Variable | Default |
//! |---|---|---|
//! | `public` (behind the site's reverse proxy) | `NEXT_PUBLIC_API_URL` | `""` (relative) |
//! | `internal` (server side, default) | `INTERNAL_API_URL` | `http://localhost:8000` |
//!
//! Other variables:
//! - `SCHOLARSHIP_API_CONTEXT`: `public` or `internal`
//! - `API_TIMEOUT_SECS`: per-request timeout, default 30
//! - `APP_ENV`: `development` enables strict response validation
//! - `SCHOLARSHIP_TOKEN_FILE`: token file path, `none` disables persistence

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{ApiError, ApiResult};
use crate::services::api::token::FileTokenStorage;

pub const DEFAULT_INTERNAL_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the client is running relative to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// Same origin as the web frontend, routed by a reverse proxy.
    Public,
    /// Server side, talking to the backend service directly.
    #[default]
    Internal,
}

impl std::str::FromStr for ExecutionContext {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" | "browser" => Ok(ExecutionContext::Public),
            "internal" | "server" => Ok(ExecutionContext::Internal),
            other => Err(ApiError::Config(format!("Unknown SCHOLARSHIP_API_CONTEXT: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub context: ExecutionContext,
    /// Scheme + host (+ optional path), without trailing slash; may be empty.
    pub base_url: String,
    pub timeout: Duration,
    /// Strict response validation by default when set.
    pub development: bool,
    pub token_file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            context: ExecutionContext::Internal,
            base_url: DEFAULT_INTERNAL_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            development: cfg!(debug_assertions),
            token_file: None,
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default settings otherwise.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let context = match non_empty("SCHOLARSHIP_API_CONTEXT") {
            Some(raw) => raw.parse()?,
            None => ExecutionContext::default(),
        };

        let base_url = match context {
            ExecutionContext::Public => non_empty("NEXT_PUBLIC_API_URL").unwrap_or_default(),
            ExecutionContext::Internal => {
                non_empty("INTERNAL_API_URL").unwrap_or_else(|| DEFAULT_INTERNAL_URL.to_string())
            }
        };

        let timeout_secs = match non_empty("API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ApiError::Config(format!("API_TIMEOUT_SECS must be a valid number: {e}")))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let development = match non_empty("APP_ENV") {
            Some(raw) => matches!(raw.trim().to_ascii_lowercase().as_str(), "development" | "dev"),
            None => cfg!(debug_assertions),
        };

        let token_file = match non_empty("SCHOLARSHIP_TOKEN_FILE") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("none") => None,
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => FileTokenStorage::default_path(),
        };

        let config = Self {
            context,
            base_url: trim_base_url(&base_url),
            timeout: Duration::from_secs(timeout_secs),
            development,
            token_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate values that would otherwise fail on the first request.
    pub fn validate(&self) -> ApiResult<()> {
        if self.timeout.is_zero() {
            return Err(ApiError::Config("API_TIMEOUT_SECS must be greater than 0".to_string()));
        }

        let url = &self.base_url;
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "API base URL must be empty (relative) or start with http:// or https://, got {url}"
            )));
        }

        Ok(())
    }
}

fn trim_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ApiResult<ApiConfig> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_internal_defaults() {
        let config = load(&[("SCHOLARSHIP_TOKEN_FILE", "none")]).unwrap();
        assert_eq!(config.context, ExecutionContext::Internal);
        assert_eq!(config.base_url, DEFAULT_INTERNAL_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.token_file, None);
    }

    #[test]
    fn test_internal_override_is_trimmed() {
        let config = load(&[("INTERNAL_API_URL", "http://backend:8000/"), ("NEXT_PUBLIC_API_URL", "https://ignored")]).unwrap();
        assert_eq!(config.base_url, "http://backend:8000");
    }

    #[test]
    fn test_public_context_defaults_to_relative() {
        let config = load(&[("SCHOLARSHIP_API_CONTEXT", "public")]).unwrap();
        assert_eq!(config.context, ExecutionContext::Public);
        assert_eq!(config.base_url, "");

        let config = load(&[("SCHOLARSHIP_API_CONTEXT", "public"), ("NEXT_PUBLIC_API_URL", "https://ss.example.edu")]).unwrap();
        assert_eq!(config.base_url, "https://ss.example.edu");
    }

    #[test]
    fn test_environment_flags() {
        assert!(load(&[("APP_ENV", "development")]).unwrap().development);
        assert!(!load(&[("APP_ENV", "production")]).unwrap().development);
        assert_eq!(
            load(&[("SCHOLARSHIP_TOKEN_FILE", "/tmp/tok")]).unwrap().token_file,
            Some(PathBuf::from("/tmp/tok"))
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(load(&[("API_TIMEOUT_SECS", "soon")]), Err(ApiError::Config(_))));
        assert!(matches!(load(&[("API_TIMEOUT_SECS", "0")]), Err(ApiError::Config(_))));
        assert!(matches!(load(&[("INTERNAL_API_URL", "ftp://x")]), Err(ApiError::Config(_))));
        assert!(matches!(load(&[("SCHOLARSHIP_API_CONTEXT", "mars")]), Err(ApiError::Config(_))));
    }
}
