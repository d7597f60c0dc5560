//! Front End Configuration
//!
//! A browser bundle has no process environment, so overrides are read at
//! build time.
//!
//! # Build Environment Variables
//! - `CATALOG_API_BASE_URL` - Scheme and host of the backend (default: http://localhost:9191)
//! - `CATALOG_LOG_LEVEL` - Minimum log level (default: info)

use log::LevelFilter;

const DEFAULT_BASE_URL: &str = "http://localhost:9191";
const DEFAULT_LISTING_PATH: &str = "/api/v1/products";
const DEFAULT_PRODUCT_PATH: &str = "/api/products";
const DEFAULT_AUTH_PATH: &str = "/api/v1/auth";

/// Backend endpoint locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host, without trailing slash
    pub base_url: String,
    /// Paginated product+stock listing
    pub listing_path: String,
    /// Single-product CRUD collection
    pub product_path: String,
    /// Registration and login
    pub auth_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Default paths against the given host
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            product_path: DEFAULT_PRODUCT_PATH.to_string(),
            auth_path: DEFAULT_AUTH_PATH.to_string(),
        }
    }

    /// Defaults, with the host taken from `CATALOG_API_BASE_URL` when it was set at build time
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("CATALOG_API_BASE_URL"))
    }

    fn resolve(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::with_base_url(url),
            None => Self::default(),
        }
    }

    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, self.listing_path)
    }

    pub fn products_url(&self) -> String {
        format!("{}{}", self.base_url, self.product_path)
    }

    pub fn auth_url(&self, action: &str) -> String {
        format!("{}{}/{}", self.base_url, self.auth_path, action)
    }
}

/// Everything the UI needs at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            api: ApiConfig::from_build_env(),
            log_level: parse_level(option_env!("CATALOG_LOG_LEVEL")),
        }
    }
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ApiConfig::default();
        assert_eq!(config.listing_url(), "http://localhost:9191/api/v1/products");
        assert_eq!(config.products_url(), "http://localhost:9191/api/products");
        assert_eq!(config.auth_url("register"), "http://localhost:9191/api/v1/auth/register");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ApiConfig::with_base_url("https://shop.example.com/");
        assert_eq!(config.products_url(), "https://shop.example.com/api/products");
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        assert_eq!(ApiConfig::resolve(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::resolve(None), ApiConfig::default());
        assert_eq!(ApiConfig::resolve(Some("http://api:8080")).base_url, "http://api:8080");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("nonsense")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }
}
