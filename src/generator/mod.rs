//! Generated output files.
//!
//! - **Sitemap**: search engine indexing (`static/sitemap.xml`)

pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
///
/// Strips indentation and line breaks between elements; text content is
/// left untouched.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}
