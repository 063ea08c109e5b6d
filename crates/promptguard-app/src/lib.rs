//! Use case orchestration for promptguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, repo, domain, and render layers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod report;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use report::{runtime_error_report, serialize_report, to_renderable};
