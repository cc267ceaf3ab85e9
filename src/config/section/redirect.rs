//! `[redirect]` section configuration.
//!
//! ```toml
//! [redirect]
//! target = "/write"     # Page every other entry path is sent to
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Redirect target path.
    pub target: String,
}

pub struct RedirectFields {
    pub target: FieldPath,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            target: "/write".into(),
        }
    }
}

impl RedirectConfig {
    pub const FIELDS: RedirectFields = RedirectFields {
        target: FieldPath::new("redirect.target"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.target.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.target,
                format!("target must be an absolute path, got `{}`", self.target),
                "e.g.: \"/write\"",
            );
        }
    }
}
