//! `[sitemap]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! routes = "src/routes"           # Route tree (relative to project root)
//! output = "static/sitemap.xml"   # Output file (relative to project root)
//! marker = "+page.svelte"         # File marking a directory as a page
//! minify = false                  # Strip indentation from the XML
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::date::DateUtc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Route tree directory.
    pub routes: PathBuf,

    /// Output path for the sitemap file.
    pub output: PathBuf,

    /// Page marker filename.
    pub marker: String,

    /// Minify the XML output.
    pub minify: bool,

    /// `lastmod` date for every entry; today (UTC) when unset.
    #[serde(skip)]
    pub date: Option<DateUtc>,
}

pub struct SitemapFields {
    pub routes: FieldPath,
    pub output: FieldPath,
    pub marker: FieldPath,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            routes: "src/routes".into(),
            output: "static/sitemap.xml".into(),
            marker: "+page.svelte".into(),
            minify: false,
            date: None,
        }
    }
}

impl SitemapConfig {
    pub const FIELDS: SitemapFields = SitemapFields {
        routes: FieldPath::new("sitemap.routes"),
        output: FieldPath::new("sitemap.output"),
        marker: FieldPath::new("sitemap.marker"),
    };

    /// Validate sitemap configuration.
    ///
    /// # Checks
    /// - `marker` must be a bare filename
    /// - `routes` and `output` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.marker.is_empty() {
            diag.error(Self::FIELDS.marker, "page marker filename must not be empty");
        } else if self.marker.contains(['/', '\\']) {
            diag.error_with_hint(
                Self::FIELDS.marker,
                format!("page marker must be a filename, got `{}`", self.marker),
                "e.g.: \"+page.svelte\"",
            );
        }

        if self.routes.as_os_str().is_empty() {
            diag.error(Self::FIELDS.routes, "routes directory must not be empty");
        }
        if self.output.as_os_str().is_empty() {
            diag.error(Self::FIELDS.output, "output path must not be empty");
        }
    }
}
