use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for promptguard reports.
pub const SCHEMA_REPORT_V1: &str = "promptguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Where a finding points. Layout findings carry no location; renderers scope
/// them as `STRUCTURE`. Syntax findings carry the parser's line/column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: RepoPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending. A hash of:
    /// `check_id + code + scope path + salient fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Promptguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PromptguardData {
    pub profile: String,

    /// `.json` files discovered under the root.
    pub files_scanned: u32,
    /// Subset of `files_scanned` that parsed as JSON.
    pub files_parsed: u32,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,

    /// Discovery-ordered scanned paths; feeds the per-file report section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scanned_files: Vec<RepoPath>,
}

/// A generic report envelope.
///
/// Keeping this generic allows promptguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PromptguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type PromptguardReport = ReportEnvelope<PromptguardData>;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn report_roundtrips_through_json() {
        let report = PromptguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "promptguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:06 UTC),
            verdict: Verdict::Fail,
            findings: vec![Finding {
                severity: Severity::Warning,
                check_id: crate::ids::CHECK_FILE_NAMING.to_string(),
                code: crate::ids::CODE_SHORT_ACRONYM.to_string(),
                message: "acronym should be at least 2 characters".to_string(),
                location: Some(Location {
                    path: RepoPath::new("prompts/A_V1.json"),
                    line: None,
                    col: None,
                }),
                help: None,
                fingerprint: None,
                data: serde_json::Value::Null,
            }],
            data: PromptguardData {
                profile: "strict".to_string(),
                files_scanned: 1,
                files_parsed: 1,
                findings_total: 1,
                findings_emitted: 1,
                truncated_reason: None,
                scanned_files: vec![RepoPath::new("prompts/A_V1.json")],
            },
        };

        let json = serde_json::to_string(&report).expect("serialize");
        let back: PromptguardReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
        assert!(json.contains("\"schema\":\"promptguard.report.v1\""));
        assert!(json.contains("2026-01-02T03:04:05Z"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let finding = Finding {
            severity: Severity::Error,
            check_id: crate::ids::CHECK_FILE_SYNTAX.to_string(),
            code: crate::ids::CODE_INVALID_JSON.to_string(),
            message: "expected value".to_string(),
            location: None,
            help: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        };
        let json = serde_json::to_string(&finding).expect("serialize");
        assert!(!json.contains("location"));
        assert!(!json.contains("help"));
        assert!(!json.contains("fingerprint"));
        assert!(!json.contains("data"));
    }
}
