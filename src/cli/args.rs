//! Command-line interface definitions.

use crate::utils::date::DateUtc;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// noobmail build and deployment tooling
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: noobmail.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate sitemap.xml from the route tree
    #[command(visible_alias = "s")]
    Sitemap {
        #[command(flatten)]
        args: SitemapArgs,
    },

    /// Show the page-load redirect decision for a request path
    #[command(visible_alias = "r")]
    Redirect {
        /// Request path, e.g. `/` or `/write`
        path: String,
    },

    /// List built-in email templates, or print one by id
    #[command(visible_alias = "t")]
    Templates {
        /// Template id (e.g. `welcome`)
        id: Option<String>,
    },

    /// List the process-manager service declarations
    Services {
        /// Print as a process-manager `{ "apps": [...] }` JSON document
        #[arg(short, long)]
        json: bool,
    },
}

/// Sitemap command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SitemapArgs {
    /// Route tree directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub routes: Option<PathBuf>,

    /// Output file (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override the site base URL
    ///
    /// Example: noobmail sitemap --base-url "https://staging.noobmail.ai"
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Date for every `lastmod` entry (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<DateUtc>,

    /// Minify the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Print the sitemap to stdout instead of writing it
    #[arg(long)]
    pub dry: bool,
}
