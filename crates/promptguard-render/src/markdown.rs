use crate::{RenderableReport, RenderableSeverity, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Promptguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files scanned: {}\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.files_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        if let Some(loc) = &f.location {
            if let Some(line) = loc.line {
                out.push_str(&format!(
                    "- [{}] `{}` / `{}` - {} (`{}`:{})\n",
                    sev, f.check_id, f.code, f.message, loc.path, line
                ));
            } else {
                out.push_str(&format!(
                    "- [{}] `{}` / `{}` - {} (`{}`)\n",
                    sev, f.check_id, f.code, f.message, loc.path
                ));
            }
        } else {
            out.push_str(&format!(
                "- [{}] `{}` / `{}` - {}\n",
                sev, f.check_id, f.code, f.message
            ));
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
