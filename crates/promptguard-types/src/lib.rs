//! Stable DTOs and IDs used across the promptguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod receipt;

pub use path::RepoPath;
pub use receipt::{
    Finding, Location, PromptguardData, PromptguardReport, ReportEnvelope, Severity, ToolMeta,
    Verdict, SCHEMA_REPORT_V1,
};
