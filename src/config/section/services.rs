//! `[[services]]` process-manager declarations.
//!
//! Each entry declares one long-running process of the deployment. Launching
//! them is left to the process manager; these declarations only describe
//! what to run.
//!
//! # Example
//!
//! ```toml
//! [[services]]
//! name = "noobmail-api"
//! script = "python3"
//! args = "-m uvicorn main:app --host 0.0.0.0 --port 8002"
//! cwd = "./backend"
//! env = { NODE_ENV = "production", ENV_FILE = ".env.production" }
//! ```
//!
//! When no `[[services]]` are declared, the API, AI and frontend services
//! of the default deployment are used.

use crate::config::{ConfigDiagnostics, FieldPath};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// A named process with its launch command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Unique service name.
    pub name: String,

    /// Executable to launch.
    pub script: String,

    /// Arguments, as one shell-style string.
    pub args: String,

    /// Working directory (relative to project root).
    pub cwd: PathBuf,

    /// Environment variables, in declaration order.
    pub env: IndexMap<String, String>,
}

pub struct ServiceFields {
    pub name: FieldPath,
    pub script: FieldPath,
}

impl ServiceConfig {
    pub const FIELDS: ServiceFields = ServiceFields {
        name: FieldPath::new("services.name"),
        script: FieldPath::new("services.script"),
    };

    fn new(name: &str, script: &str, args: &str, cwd: &str, env: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            script: script.to_string(),
            args: args.to_string(),
            cwd: cwd.into(),
            env: env
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Full command line, e.g. `npm run preview -- --host`.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.script.clone()
        } else {
            format!("{} {}", self.script, self.args)
        }
    }
}

/// Services of the default deployment.
pub fn default_services() -> Vec<ServiceConfig> {
    const PRODUCTION_BACKEND: &[(&str, &str)] =
        &[("NODE_ENV", "production"), ("ENV_FILE", ".env.production")];

    vec![
        ServiceConfig::new(
            "noobmail-api",
            "python3",
            "-m uvicorn main:app --host 0.0.0.0 --port 8002",
            "./backend",
            PRODUCTION_BACKEND,
        ),
        ServiceConfig::new(
            "noobmail-ai",
            "python3",
            "-m uvicorn local_ai_service:app --host 0.0.0.0 --port 8001",
            "./backend",
            PRODUCTION_BACKEND,
        ),
        ServiceConfig::new(
            "noobmail-frontend",
            "npm",
            "run preview -- --host",
            "./frontend",
            &[("NODE_ENV", "production")],
        ),
    ]
}

/// Validate service declarations.
///
/// # Checks
/// - every service has a non-empty, unique `name`
/// - every service has a non-empty `script`
pub fn validate_services(services: &[ServiceConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = HashSet::new();

    for (i, service) in services.iter().enumerate() {
        if service.name.trim().is_empty() {
            diag.error(
                ServiceConfig::FIELDS.name,
                format!("service #{} has no name", i + 1),
            );
        } else if !seen.insert(service.name.as_str()) {
            diag.error_with_hint(
                ServiceConfig::FIELDS.name,
                format!("duplicate service name `{}`", service.name),
                "service names must be unique",
            );
        }

        if service.script.trim().is_empty() {
            diag.error(
                ServiceConfig::FIELDS.script,
                format!("service `{}` has no script", service.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_services() {
        let config = test_parse_config("");
        let names: Vec<_> = config.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["noobmail-api", "noobmail-ai", "noobmail-frontend"]);

        let api = &config.services[0];
        assert_eq!(
            api.command_line(),
            "python3 -m uvicorn main:app --host 0.0.0.0 --port 8002"
        );
        assert_eq!(api.cwd, PathBuf::from("./backend"));
        assert_eq!(api.env["ENV_FILE"], ".env.production");

        let frontend = &config.services[2];
        assert_eq!(frontend.command_line(), "npm run preview -- --host");
        assert_eq!(frontend.env.len(), 1);
    }

    #[test]
    fn test_declared_services_replace_defaults() {
        let config = test_parse_config(
            r#"[[services]]
name = "worker"
script = "python3"
args = "scheduler_service.py"
cwd = "./backend"
env = { TZ = "UTC" }
"#,
        );

        assert_eq!(config.services.len(), 1);
        assert_eq!(config.services[0].name, "worker");
        assert_eq!(config.services[0].env["TZ"], "UTC");
    }

    #[test]
    fn test_env_keeps_declaration_order() {
        let api = &default_services()[0];
        let keys: Vec<_> = api.env.keys().map(String::as_str).collect();
        assert_eq!(keys, ["NODE_ENV", "ENV_FILE"]);

        let config = test_parse_config(
            r#"[[services]]
name = "worker"
script = "python3"
env = { ZONE = "eu", APP_ENV = "production", MODE = "batch" }
"#,
        );
        let keys: Vec<_> = config.services[0].env.keys().map(String::as_str).collect();
        assert_eq!(keys, ["ZONE", "APP_ENV", "MODE"]);
    }

    #[test]
    fn test_command_line_without_args() {
        let service = ServiceConfig {
            name: "x".into(),
            script: "./run.sh".into(),
            ..ServiceConfig::default()
        };
        assert_eq!(service.command_line(), "./run.sh");
    }

    #[test]
    fn test_validate_default_services() {
        let mut diag = ConfigDiagnostics::new();
        validate_services(&default_services(), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_duplicates_and_missing_fields() {
        let mut services = default_services();
        services.push(services[0].clone());
        services.push(ServiceConfig::default());

        let mut diag = ConfigDiagnostics::new();
        validate_services(&services, &mut diag);

        let messages: Vec<_> = diag.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("duplicate service name `noobmail-api`"));
        assert!(messages[1].contains("has no name"));
        assert!(messages[2].contains("has no script"));
    }
}
