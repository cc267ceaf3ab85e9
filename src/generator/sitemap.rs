//! Sitemap generation.
//!
//! Walks the route tree and writes a sitemap listing every page for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://noobmail.ai</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! The root page is `weekly` with priority `1.0`; every other page is
//! `monthly` with priority `0.8`. All entries share the run date.

use crate::{
    config::SiteConfig,
    generator::minify_xml,
    log,
    route::{DiscoverError, RoutePath, discover_routes},
    utils::{date::DateUtc, plural_count},
};
use anyhow::Result;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap generation failures.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to discover routes")]
    Discover(#[from] DiscoverError),

    #[error("failed to create output directory `{path}`")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write sitemap to `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Change frequency hint from the sitemap protocol.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discover routes, render the sitemap and write it.
///
/// With `dry`, only the document is printed to stdout and nothing is written.
/// Returns the number of routes in the sitemap.
pub fn build_sitemap(config: &SiteConfig, dry: bool) -> Result<usize> {
    let sitemap = &config.sitemap;

    if !dry {
        log!("sitemap"; "discovering routes in {}", config.root_relative(&sitemap.routes).display());
    }
    let routes = discover_routes(&sitemap.routes, &sitemap.marker).map_err(SitemapError::from)?;
    if !dry {
        log!("sitemap"; "found {}", plural_count(routes.len(), "route"));
    }

    let date = sitemap.date.unwrap_or_else(DateUtc::today);
    let xml = render_sitemap(&routes, config.site.base_url(), date);
    let xml = minify_xml(&xml, sitemap.minify);

    if dry {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{xml}")?;
        return Ok(routes.len());
    }

    write_sitemap(&sitemap.output, &xml)?;
    log!("sitemap"; "written to {}", config.root_relative(&sitemap.output).display());

    Ok(routes.len())
}

/// Render routes into a sitemap document.
///
/// Pure: the same routes, base URL and date always give the same text.
pub fn render_sitemap(routes: &[RoutePath], base_url: &str, date: DateUtc) -> String {
    Sitemap::new(routes, base_url, date).into_xml()
}

/// Write the document, creating missing parent directories.
///
/// A directory created before a failed write is left in place.
fn write_sitemap(path: &Path, xml: &str) -> Result<(), SitemapError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| SitemapError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, xml).map_err(|source| SitemapError::Write {
        path: path.to_path_buf(),
        source,
    })
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    changefreq: ChangeFrequency,
    priority: f32,
}

impl UrlEntry {
    fn for_route(route: &RoutePath, base_url: &str, lastmod: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        if route.is_root() {
            Self {
                loc: base_url.to_string(),
                lastmod: lastmod.to_string(),
                changefreq: ChangeFrequency::Weekly,
                priority: 1.0,
            }
        } else {
            Self {
                loc: format!("{base_url}{route}"),
                lastmod: lastmod.to_string(),
                changefreq: ChangeFrequency::Monthly,
                priority: 0.8,
            }
        }
    }
}

impl Sitemap {
    fn new(routes: &[RoutePath], base_url: &str, date: DateUtc) -> Self {
        let lastmod = date.to_string();
        let urls = routes
            .iter()
            .map(|route| UrlEntry::for_route(route, base_url, &lastmod))
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&escape_xml(&entry.lastmod));
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
