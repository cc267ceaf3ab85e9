//! Filesystem path utilities.
//!
//! - [`fs`]: path normalization (`normalize_path`, `resolve_under`)

pub mod fs;

pub use fs::{normalize_path, resolve_under};
