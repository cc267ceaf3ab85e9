//! Logging utilities with colored output.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("sitemap"; "found {} routes", count);
//! debug!("config"; "loaded {}", path.display());
//! ```
//!
//! `error` and `warning` messages and all `debug!` output go to stderr, so
//! stdout carries only progress lines and command output.

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::debug($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    write_line(module, message, false);
}

/// Log a verbose-only message, always on stderr
#[inline]
pub fn debug(module: &str, message: &str) {
    write_line(module, message, true);
}

fn write_line(module: &str, message: &str, debug: bool) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if goes_to_stderr(&module_lower, debug) {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{prefix} {message}").ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{prefix} {message}").ok();
        stdout.flush().ok();
    }
}

/// Modules whose messages belong on the diagnostic stream
#[inline]
fn is_diagnostic(module_lower: &str) -> bool {
    matches!(module_lower, "error" | "warning")
}

#[inline]
fn goes_to_stderr(module_lower: &str, debug: bool) -> bool {
    debug || is_diagnostic(module_lower)
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "sitemap" => prefix.bright_blue().bold().to_string(),
        "services" | "templates" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        for module in ["sitemap", "services", "error", "config"] {
            let prefix = colorize_prefix(module, module);
            assert!(prefix.contains(&format!("[{module}]")));
        }
    }

    #[test]
    fn test_diagnostic_modules() {
        assert!(is_diagnostic("error"));
        assert!(is_diagnostic("warning"));
        assert!(!is_diagnostic("sitemap"));
        assert!(!is_diagnostic("hint"));
    }

    #[test]
    fn test_debug_output_on_stderr() {
        assert!(goes_to_stderr("config", true));
        assert!(goes_to_stderr("sitemap", true));
        assert!(goes_to_stderr("warning", false));
        assert!(!goes_to_stderr("sitemap", false));
        assert!(!goes_to_stderr("config", false));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
