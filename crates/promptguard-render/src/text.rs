use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdict};

/// Render the terminal report: layout section, per-file check results, and a
/// summary listing every finding as `scope: message`.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("Promptguard report\n");
    out.push_str("==================\n\n");

    render_layout_section(report, &mut out);

    if report.data.files_scanned == 0 {
        out.push_str("\nno prompt files found; nothing validated\n");
        out.push_str(&format!("\nverdict: {}\n", verdict_label(report.verdict)));
        return out;
    }

    render_files_section(report, &mut out);
    render_summary_section(report, &mut out);

    out.push_str(&format!("\nverdict: {}\n", verdict_label(report.verdict)));
    out
}

fn render_layout_section(report: &RenderableReport, out: &mut String) {
    out.push_str("Layout\n");
    let layout: Vec<&RenderableFinding> = report
        .findings
        .iter()
        .filter(|f| f.location.is_none())
        .collect();
    if layout.is_empty() {
        out.push_str("  ok\n");
    } else {
        for f in layout {
            out.push_str(&format!("  {} {}\n", severity_label(f.severity), f.message));
        }
    }
}

fn render_files_section(report: &RenderableReport, out: &mut String) {
    out.push_str(&format!("\nFiles ({} scanned)\n", report.data.files_scanned));

    for path in &report.data.scanned_files {
        let file_findings: Vec<&RenderableFinding> = report
            .findings
            .iter()
            .filter(|f| f.location.as_ref().map(|l| l.path.as_str()) == Some(path.as_str()))
            .collect();

        let syntax = file_findings
            .iter()
            .find(|f| f.check_id.starts_with("file.syntax"));
        if let Some(f) = syntax {
            let label = if f.code == "unreadable_file" {
                "read FAIL"
            } else {
                "syntax FAIL"
            };
            out.push_str(&format!(
                "  {path}  {label} (structure and naming skipped)\n"
            ));
            continue;
        }

        let structure = file_findings
            .iter()
            .filter(|f| f.check_id.starts_with("prompt.structure"))
            .count();
        let naming = file_findings
            .iter()
            .filter(|f| f.check_id.starts_with("file.naming"))
            .count();

        out.push_str(&format!(
            "  {path}  syntax ok | structure {} | naming {}\n",
            count_label(structure),
            count_label(naming)
        ));
    }
}

fn render_summary_section(report: &RenderableReport, out: &mut String) {
    out.push_str("\nSummary\n");

    if report.findings.is_empty() {
        out.push_str("  all checks passed\n");
        return;
    }

    for f in &report.findings {
        out.push_str(&format!("  {}: {}\n", f.scope(), f.message));
    }
    if let Some(reason) = &report.data.truncated_reason {
        out.push_str(&format!("  note: {reason}\n"));
    }
    out.push_str(&format!(
        "  {} issue(s) found\n",
        report.data.findings_total
    ));
}

fn count_label(n: usize) -> String {
    if n == 0 {
        "ok".to_string()
    } else {
        format!("{n} issue(s)")
    }
}

fn severity_label(sev: RenderableSeverity) -> &'static str {
    match sev {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    }
}

fn verdict_label(verdict: RenderableVerdict) -> &'static str {
    match verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    }
}
