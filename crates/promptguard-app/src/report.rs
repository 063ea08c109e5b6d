use anyhow::Context;
use promptguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdict,
};
use promptguard_types::{
    ids, Finding, PromptguardData, PromptguardReport, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn serialize_report(report: &PromptguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &PromptguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            files_scanned: report.data.files_scanned,
            findings_total: report.data.findings_total,
            findings_emitted: report.data.findings_emitted,
            truncated_reason: report.data.truncated_reason.clone(),
            scanned_files: report
                .data
                .scanned_files
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
        help: f.help.clone(),
    }
}

/// A failing report for runs that could not evaluate at all, so CI consumers
/// still receive an artifact.
pub fn runtime_error_report(message: &str) -> PromptguardReport {
    let now = OffsetDateTime::now_utc();

    PromptguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "promptguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run promptguard.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: PromptguardData {
            profile: "unknown".to_string(),
            files_scanned: 0,
            files_parsed: 0,
            findings_total: 1,
            findings_emitted: 1,
            truncated_reason: None,
            scanned_files: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_fails_with_a_single_finding() {
        let report = runtime_error_report("root unreadable");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].check_id, ids::CHECK_TOOL_RUNTIME);
        assert!(report.findings[0].message.contains("root unreadable"));
    }

    #[test]
    fn to_renderable_projects_scopes_and_counts() {
        let report = runtime_error_report("boom");
        let renderable = to_renderable(&report);
        assert_eq!(renderable.findings.len(), 1);
        assert_eq!(renderable.findings[0].scope(), "STRUCTURE");
        assert_eq!(renderable.data.findings_total, 1);

        let bytes = serialize_report(&report).expect("serialize");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value["schema"], "promptguard.report.v1");
    }
}
