use crate::checks;
use crate::fingerprint;
use crate::model::RepoModel;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use promptguard_types::{Finding, PromptguardData, Severity, Verdict};

pub fn evaluate(model: &RepoModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, cfg, &mut findings);

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    for f in &mut findings {
        if f.fingerprint.is_none() {
            let scope = f
                .location
                .as_ref()
                .map(|l| l.path.as_str())
                .unwrap_or("~");
            f.fingerprint = Some(fingerprint::fingerprint_for_finding(
                &f.check_id,
                &f.code,
                scope,
                Some(&f.message),
            ));
        }
    }

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    // A run that discovered no prompt files is a distinct terminal state:
    // nothing was validated, so layout findings alone never fail it.
    let verdict = if model.prompts.is_empty() {
        Verdict::Pass
    } else {
        compute_verdict(&emitted, cfg.fail_on)
    };
    let counts = SeverityCounts::from_findings(&emitted);

    let data = PromptguardData {
        profile: cfg.profile.clone(),
        files_scanned: model.prompts.len() as u32,
        files_parsed: model.prompts.iter().filter(|p| p.parsed().is_some()).count() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
        scanned_files: model.prompts.iter().map(|p| p.path.clone()).collect(),
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line (missing last)
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, al) = match &a.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bp, bl) = match &b.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(al.cmp(&bl))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
