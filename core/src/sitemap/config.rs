use crate::error::{CoreError, CoreResult};
use crate::slug::CollisionPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use super::render::ChangeFrequency;

pub const DEFAULT_BASE_URL: &str = "https://dibull.com";
pub const DEFAULT_OUTPUT_PATH: &str = "public/sitemap.xml";
pub const DEFAULT_ROBOTS_PATH: &str = "public/robots.txt";

pub const DEFAULT_STATIC_ROUTES: [&str; 10] = [
    "/",
    "/about",
    "/contact",
    "/careers",
    "/case-studies",
    "/privacy-policy",
    "/terms-of-service",
    "/refund-policy",
    "/free-tools",
    "/academy",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SitemapConfig {
    /// Origin prefixed to every path, without a trailing slash.
    pub base_url: String,
    pub static_routes: Vec<String>,
    pub output_path: PathBuf,
    pub changefreq: ChangeFrequency,
    /// Priority in tenths, `8` renders as `0.8`.
    pub priority_tenths: u8,
    pub collision_policy: CollisionPolicy,
    pub write_robots_txt: bool,
    pub robots_path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            static_routes: DEFAULT_STATIC_ROUTES.iter().map(|r| r.to_string()).collect(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            changefreq: ChangeFrequency::Weekly,
            priority_tenths: 8,
            collision_policy: CollisionPolicy::Disambiguate,
            write_robots_txt: false,
            robots_path: PathBuf::from(DEFAULT_ROBOTS_PATH),
        }
    }
}

impl SitemapConfig {
    /// Reads a JSON config; omitted fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let cfg: SitemapConfig = serde_json::from_slice(&bytes)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| CoreError::InvalidInput(format!("invalid base_url: {}", e)))?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(CoreError::InvalidInput(
                "base_url scheme must be http or https".to_string(),
            ));
        }
        if parsed.host_str().is_none() {
            return Err(CoreError::InvalidInput("base_url has no host".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(CoreError::InvalidInput(
                "base_url must not carry a query or fragment".to_string(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(CoreError::InvalidInput(
                "base_url must not end with '/'".to_string(),
            ));
        }

        for route in &self.static_routes {
            if !route.starts_with('/') {
                return Err(CoreError::InvalidInput(format!(
                    "static route '{}' must start with '/'",
                    route
                )));
            }
        }

        if self.priority_tenths > 10 {
            return Err(CoreError::InvalidInput(
                "priority_tenths must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
