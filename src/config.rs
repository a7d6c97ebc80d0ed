//! Client configuration resolved at build time.
//!
//! Optional:
//! - `SERVICEMARKET_API_URL`: base URL of the REST backend (default `/api`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Configuration baked in by the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("SERVICEMARKET_API_URL"))
    }

    pub(crate) fn with_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }

    /// Absolute URL for an API `path` such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
