//! Templates command implementation.
//!
//! Without an id, lists the built-in email templates. With one, prints the
//! subject line followed by the HTML body so it can be piped into a mailer.

use anyhow::{Result, bail};

use crate::template::{self, Template};

pub fn run_templates(id: Option<&str>) -> Result<()> {
    let output = match id {
        Some(id) => render_template(find(id)?),
        None => render_listing(template::default_templates()),
    };
    print!("{output}");
    Ok(())
}

fn find(id: &str) -> Result<&'static Template> {
    match template::find_template(id) {
        Some(template) => Ok(template),
        None => {
            let available: Vec<_> = template::default_templates().iter().map(|t| t.id).collect();
            bail!(
                "unknown template `{id}` (available: {})",
                available.join(", ")
            )
        }
    }
}

fn render_listing(templates: &[Template]) -> String {
    let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| format!("{:width$}  {} ({})\n", t.id, t.name, t.subject))
        .collect()
}

fn render_template(template: &Template) -> String {
    format!("Subject: {}\n\n{}", template.subject, template.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_listing() {
        let listing = render_listing(template::default_templates());
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "welcome  Welcome Email (Welcome to Our Newsletter!)");
        assert_eq!(lines[1], "update   Monthly Update (Monthly Newsletter Update)");
    }

    #[test]
    fn test_render_template() {
        let rendered = render_template(find("update").unwrap());
        assert!(rendered.starts_with("Subject: Monthly Newsletter Update\n\n<div"));
        assert!(rendered.contains("<h2>What's New</h2>"));
    }

    #[test]
    fn test_unknown_template_lists_available() {
        let err = find("newsletter").unwrap_err().to_string();
        assert!(err.contains("unknown template `newsletter`"));
        assert!(err.contains("welcome, update"));
    }
}
