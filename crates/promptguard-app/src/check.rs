//! The `check` use case: evaluate the repository and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use promptguard_settings::{Overrides, ResolvedConfig};
use promptguard_types::{PromptguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Validation root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PromptguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, build the repository model, evaluate,
/// produce the report envelope.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        promptguard_settings::PromptguardConfigV1::default()
    } else {
        promptguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = promptguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model =
        promptguard_repo::build_repo_model(input.repo_root).context("build repository model")?;

    let domain_report = promptguard_domain::evaluate(&model, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();

    let report = PromptguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "promptguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use promptguard_types::ids;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(root: &Utf8Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn check(root: &Utf8Path, config_text: &str) -> CheckOutput {
        run_check(CheckInput {
            repo_root: root,
            config_text,
            overrides: Overrides::default(),
        })
        .expect("run_check")
    }

    #[test]
    fn clean_repository_passes() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root,
            "prompts/AB_V1.json",
            r#"{"task": "summarize", "description": "d", "parameters": {}}"#,
        );
        std::fs::create_dir_all(root.join("YAML-versions/prompts")).expect("mirror");

        let output = check(&root, "");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert!(output.report.findings.is_empty());
        assert_eq!(output.report.data.files_scanned, 1);
        assert_eq!(output.resolved_config.effective.profile, "strict");
    }

    #[test]
    fn naming_issue_fails_under_strict() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root,
            "prompts/A_V1.json",
            r#"{"task": "t", "description": "d", "parameters": {}}"#,
        );
        std::fs::create_dir_all(root.join("YAML-versions/prompts")).expect("mirror");

        let output = check(&root, "");
        assert_eq!(output.report.verdict, Verdict::Fail);
        assert!(output
            .report
            .findings
            .iter()
            .any(|f| f.code == ids::CODE_SHORT_ACRONYM));
    }

    #[test]
    fn naming_issue_warns_under_lenient() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root,
            "prompts/A_V1.json",
            r#"{"task": "t", "description": "d", "parameters": {}}"#,
        );
        std::fs::create_dir_all(root.join("YAML-versions/prompts")).expect("mirror");

        let output = check(&root, "profile = \"lenient\"\n");
        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(verdict_exit_code(output.report.verdict), 0);
    }

    #[test]
    fn syntax_error_skips_dependent_checks_for_that_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        // Broken name on purpose: naming would flag it if it ran.
        write_file(&root, "prompts/BADNAME.json", r#"{"task": "x",}"#);
        std::fs::create_dir_all(root.join("YAML-versions/prompts")).expect("mirror");

        let output = check(&root, "");
        assert_eq!(output.report.verdict, Verdict::Fail);
        assert_eq!(output.report.findings.len(), 1);
        assert_eq!(output.report.findings[0].code, ids::CODE_INVALID_JSON);
    }

    #[test]
    fn empty_root_passes_with_zero_files() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let output = check(&root, "");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.data.files_scanned, 0);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let err = run_check(CheckInput {
            repo_root: &root,
            config_text: "profile = [",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 1);
    }
}
