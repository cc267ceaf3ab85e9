//! Page-load redirect from any entry path to the composer.
//!
//! Every visit that does not already land on the target (default `/write`)
//! is sent there with a temporary redirect.

/// HTTP status used for the redirect.
pub const TEMPORARY_REDIRECT: u16 = 307;

/// Outcome of a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Already on the target, render the page.
    None,
    /// Send the visitor to this location.
    To(String),
}

impl Redirect {
    /// HTTP status for this outcome, if it redirects.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::None => None,
            Self::To(_) => Some(TEMPORARY_REDIRECT),
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::To(location) => Some(location),
        }
    }
}

/// Decide the redirect for a request path.
///
/// Only the pathname is compared, so `/write?draft=1` and `/write#top` stay
/// put. Otherwise the match is exact: `/write/` is not `/write`.
pub fn resolve_redirect(path: &str, target: &str) -> Redirect {
    if pathname(path) == target {
        Redirect::None
    } else {
        Redirect::To(target.to_string())
    }
}

/// Request path without its query string and fragment.
fn pathname(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |end| &path[..end])
}
