//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://noobmail.ai"     # Base URL for absolute sitemap links
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_URL: &str = "https://noobmail.ai";

/// Public site settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site URL without trailing slash (one is trimmed if present).
    pub url: String,
}

pub struct SiteFields {
    pub url: FieldPath,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        url: FieldPath::new("site.url"),
    };

    /// Base URL used to build absolute links, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://noobmail.ai",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://noobmail.ai",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.error(
                        Self::FIELDS.url,
                        "URL must not contain a query string or fragment",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://noobmail.ai",
                );
            }
        }
    }
}
