//! Errors raised while loading `noobmail.toml`.
//!
//! Section validators push problems into [`ConfigDiagnostics`] instead of
//! returning early, so one run reports every bad field:
//!
//! ```text
//! noobmail.toml has 2 problems
//!
//!   site.url        invalid URL: relative URL without a base
//!                   hint: use format like https://noobmail.ai
//!   redirect.target target must be an absolute path, got `write`
//! ```

use super::FieldPath;
use crate::utils::plural_count;
use owo_colors::OwoColorize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("malformed noobmail.toml")]
    Toml(#[from] toml::de::Error),

    // Not #[from]: the diagnostics already print everything, a source would repeat it
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

/// Every problem found by one validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message,
            hint,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Ok` when nothing was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!(
            "noobmail.toml has {}",
            plural_count(self.errors.len(), "problem")
        );
        write!(f, "{}", header.red().bold())?;

        let width = self
            .errors()
            .iter()
            .map(|e| e.field.as_str().len())
            .max()
            .unwrap_or(0);
        for error in self.errors() {
            let field = format!("{:width$}", error.field.as_str());
            write!(f, "\n  {} {}", field.cyan(), error.message)?;
            if let Some(hint) = &error.hint {
                write!(f, "\n  {:width$} {} {hint}", "", "hint:".yellow())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
