//! Services command implementation.
//!
//! Prints the `[[services]]` declarations, either as a readable list or as a
//! process-manager ecosystem document:
//!
//! ```json
//! { "apps": [ { "name": "noobmail-api", "script": "python3", ... } ] }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{ServiceConfig, SiteConfig};
use crate::log;
use crate::utils::plural_count;

/// Ecosystem document wrapping the declared services.
#[derive(Debug, Serialize)]
struct Ecosystem<'a> {
    apps: &'a [ServiceConfig],
}

pub fn run_services(config: &SiteConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", render_ecosystem(&config.services)?);
        return Ok(());
    }

    log!("services"; "{}", plural_count(config.services.len(), "service"));
    print!("{}", render_listing(&config.services));
    Ok(())
}

fn render_ecosystem(services: &[ServiceConfig]) -> Result<String> {
    serde_json::to_string_pretty(&Ecosystem { apps: services })
        .context("Failed to serialize services")
}

fn render_listing(services: &[ServiceConfig]) -> String {
    let mut out = String::new();
    for service in services {
        out.push_str(&format!("{}\n", service.name));
        out.push_str(&format!("  run: {}\n", service.command_line()));
        out.push_str(&format!("  cwd: {}\n", service.cwd.display()));
        for (key, value) in &service.env {
            out.push_str(&format!("  env: {key}={value}\n"));
        }
    }
    out
}
