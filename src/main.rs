//! noobmail - build and deployment tooling for the noobmail web app.

mod cli;
mod config;
mod generator;
mod logger;
mod route;
mod template;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::sitemap::build_sitemap;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = run(&cli) {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Sitemap { args } => build_sitemap(&config, args.dry).map(|_| ()),
        Commands::Redirect { path } => {
            cli::redirect::print_redirect(&config, path);
            Ok(())
        }
        Commands::Templates { id } => cli::templates::run_templates(id.as_deref()),
        Commands::Services { json } => cli::services::run_services(&config, *json),
    }
}
