//! Command-line interface.

mod args;
pub mod redirect;
pub mod services;
pub mod templates;

pub use args::{Cli, Commands, SitemapArgs};
