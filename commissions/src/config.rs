//! Site configuration.
//!
//! The browser has no process environment, so values are baked in at build
//! time: trunk exports `ARTZYBEAR_BACKEND_URL` / `ARTZYBEAR_LOG` to `cargo`,
//! and `option_env!` picks them up.

/// Backend used when the build did not set one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Every backend route lives under this prefix.
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    backend_url: String,
    log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl SiteConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Configuration captured from the build environment.
    pub fn from_build_env() -> Self {
        let mut config = Self::new(option_env!("ARTZYBEAR_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL));
        if let Some(filter) = option_env!("ARTZYBEAR_LOG") {
            config.log_filter = filter.to_string();
        }
        config
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// `<backend>/api`
    pub fn api_base(&self) -> String {
        format!("{}{}", self.backend_url, API_PREFIX)
    }

    /// Absolute URL for an API route such as `/commissions`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base(), path.trim_start_matches('/'))
    }
}
