//! Redirect command implementation.

use crate::config::SiteConfig;
use crate::route::{Redirect, resolve_redirect};

/// Describe the redirect decision for `path`, e.g. `307 -> /write`.
pub fn describe_redirect(config: &SiteConfig, path: &str) -> String {
    match resolve_redirect(path, &config.redirect.target) {
        Redirect::None => "no redirect".to_string(),
        redirect @ Redirect::To(_) => format!(
            "{} -> {}",
            redirect.status().unwrap_or_default(),
            redirect.location().unwrap_or_default()
        ),
    }
}

pub fn print_redirect(config: &SiteConfig, path: &str) {
    println!("{}", describe_redirect(config, path));
}
