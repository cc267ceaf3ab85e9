//! Built-in email templates.
//!
//! Static HTML bodies with placeholder copy, offered as starting points in
//! the composer. The markup lives next to this file and is embedded at
//! compile time.
//!
//! # Usage
//!
//! ```ignore
//! let welcome = template::find_template("welcome").unwrap();
//! send(welcome.subject, welcome.content);
//! ```

use serde::Serialize;

/// An email template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub content: &'static str,
}

impl Template {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        subject: &'static str,
        content: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            subject,
            content,
        }
    }
}

pub const WELCOME: Template = Template::new(
    "welcome",
    "Welcome Email",
    "Welcome to Our Newsletter!",
    include_str!("email/welcome.html"),
);

pub const MONTHLY_UPDATE: Template = Template::new(
    "update",
    "Monthly Update",
    "Monthly Newsletter Update",
    include_str!("email/update.html"),
);

static DEFAULT_TEMPLATES: [Template; 2] = [WELCOME, MONTHLY_UPDATE];

/// Built-in templates, in display order.
pub fn default_templates() -> &'static [Template] {
    &DEFAULT_TEMPLATES
}

/// Look a built-in template up by id.
pub fn find_template(id: &str) -> Option<&'static Template> {
    DEFAULT_TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_order() {
        let ids: Vec<_> = default_templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, ["welcome", "update"]);
    }

    #[test]
    fn test_find_template() {
        let welcome = find_template("welcome").unwrap();
        assert_eq!(welcome.name, "Welcome Email");
        assert_eq!(welcome.subject, "Welcome to Our Newsletter!");
        assert!(welcome.content.contains("<h1 style=\"color: #333;\">Welcome to Our Newsletter!</h1>"));

        let update = find_template("update").unwrap();
        assert_eq!(update.subject, "Monthly Newsletter Update");
        assert!(update.content.contains("<h2>Featured Content</h2>"));

        assert!(find_template("missing").is_none());
    }

    #[test]
    fn test_template_ids_unique() {
        let templates = default_templates();
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_content_is_single_root_div() {
        for template in default_templates() {
            let content = template.content.trim();
            assert!(content.starts_with("<div"), "{}", template.id);
            assert!(content.ends_with("</div>"), "{}", template.id);
        }
    }
}
