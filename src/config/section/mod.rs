//! Configuration section definitions.
//!
//! | Section         | Purpose                                   |
//! |-----------------|-------------------------------------------|
//! | `[site]`        | Public base URL                           |
//! | `[sitemap]`     | Route tree, output file, page marker      |
//! | `[redirect]`    | Page-load redirect target                 |
//! | `[[services]]`  | Process-manager service declarations      |

mod redirect;
mod services;
mod site;
mod sitemap;

pub use redirect::RedirectConfig;
pub use services::{ServiceConfig, default_services, validate_services};
pub use site::SiteSectionConfig;
pub use sitemap::SitemapConfig;
