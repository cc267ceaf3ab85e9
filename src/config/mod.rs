//! Project configuration management for `noobmail.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── sitemap    # [sitemap]
//! │   ├── redirect   # [redirect]
//! │   └── services   # [[services]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional: without one, every section takes its
//! defaults and paths resolve against the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{RedirectConfig, ServiceConfig, SiteSectionConfig, SitemapConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, SitemapArgs},
    debug, log,
    utils::path::resolve_under,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the current directory.
pub const CONFIG_FILE: &str = "noobmail.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing noobmail.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Public site settings
    pub site: SiteSectionConfig,

    /// Sitemap generation settings
    pub sitemap: SitemapConfig,

    /// Page-load redirect settings
    pub redirect: RedirectConfig,

    /// Process-manager service declarations
    pub services: Vec<ServiceConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            sitemap: SitemapConfig::default(),
            redirect: RedirectConfig::default(),
            services: section::default_services(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. An explicit `--config`
    /// that cannot be found is an error; a missing default file is not.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let name = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        let (mut config, root) = match find_config_file(&cwd, &name) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                (config, root)
            }
            None if cli.config.is_some() => {
                bail!(ConfigError::NotFound(name));
            }
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                (Self::default(), cwd)
            }
        };

        config.apply_command_options(cli);
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root (for display)
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Sitemap { args } => self.apply_sitemap_args(args),
            // Other commands only read config
            Commands::Redirect { .. } | Commands::Templates { .. } | Commands::Services { .. } => {}
        }
    }

    /// Apply sitemap arguments from CLI.
    fn apply_sitemap_args(&mut self, args: &SitemapArgs) {
        Self::update_option(&mut self.sitemap.routes, args.routes.as_ref());
        Self::update_option(&mut self.sitemap.output, args.output.as_ref());
        Self::update_option(&mut self.sitemap.minify, args.minify.as_ref());
        Self::update_option(&mut self.site.url, args.base_url.as_ref());

        if args.date.is_some() {
            self.sitemap.date = args.date;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve all paths relative to the root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);

        self.sitemap.routes = resolve_under(&root, &self.sitemap.routes);
        self.sitemap.output = resolve_under(&root, &self.sitemap.output);
        // Service cwds stay as declared; the process manager resolves them.

        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        self.redirect.validate(&mut diag);
        section::validate_services(&self.services, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
