//! Page routes discovered from the route tree.
//!
//! ```text
//! src/routes/
//! ├── +page.svelte              -> /
//! ├── pricing/+page.svelte      -> /pricing
//! ├── blog/[id]/+page.svelte    -> /blog        (dynamic segment elided)
//! └── _drafts/+page.svelte      -> (skipped)
//! ```

mod discover;
mod redirect;

pub use discover::{DiscoverError, discover_routes};
pub use redirect::{Redirect, resolve_redirect};

use std::fmt;

/// URL path of a page.
///
/// Invariants:
/// - Always starts with `/`
/// - No trailing slash, except for the root itself
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    /// The site root, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a route from path segments. No segments yields the root.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(segment.as_ref());
        }

        if path.is_empty() { Self::root() } else { Self(path) }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
