use crate::model::RepoModel;
use crate::policy::{CheckPolicy, EffectiveConfig};
use promptguard_types::{ids, Finding, Location, RepoPath};
use serde_json::{json, Value as JsonValue};

const SEPARATOR: &str = "_V";
const MIN_ACRONYM_CHARS: usize = 2;

/// Validate prompt file base names against the `ACRONYM_V<digits>.json` pattern.
///
/// Syntactically broken files are not inspected further, so naming runs only
/// on parsed prompts (matches the upstream behavior; naming itself never looks
/// at content).
pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_FILE_NAMING) else {
        return;
    };

    for prompt in &model.prompts {
        if prompt.parsed().is_none() {
            continue;
        }
        check_name(&prompt.path, policy, out);
    }
}

/// The pure per-file rule. Non-`.json` names are skipped entirely.
pub(crate) fn check_name(path: &RepoPath, policy: &CheckPolicy, out: &mut Vec<Finding>) {
    let file_name = path.file_name();
    let Some(stem) = file_name.strip_suffix(".json") else {
        return;
    };

    let separators = stem.matches(SEPARATOR).count();
    if separators == 0 {
        out.push(finding(
            policy,
            path,
            ids::CODE_MISSING_VERSION_SEPARATOR,
            format!("file name should follow pattern 'ACRONYM_V<digits>.json', got '{file_name}'"),
            JsonValue::Null,
        ));
        return;
    }
    if separators > 1 {
        out.push(finding(
            policy,
            path,
            ids::CODE_MULTIPLE_VERSION_SEPARATORS,
            format!("file name should have exactly one '{SEPARATOR}' separator, got '{file_name}'"),
            JsonValue::Null,
        ));
        return;
    }

    let Some((acronym, version)) = stem.split_once(SEPARATOR) else {
        return;
    };

    // Version and acronym rules are independent: a file can trigger both.
    if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit()) {
        out.push(finding(
            policy,
            path,
            ids::CODE_NON_NUMERIC_VERSION,
            format!("version should be numeric, got 'V{version}' in '{file_name}'"),
            json!({ "version": version }),
        ));
    }
    if acronym.chars().count() < MIN_ACRONYM_CHARS {
        out.push(finding(
            policy,
            path,
            ids::CODE_SHORT_ACRONYM,
            format!(
                "acronym should be at least {MIN_ACRONYM_CHARS} characters, got '{acronym}' in '{file_name}'"
            ),
            json!({ "acronym": acronym }),
        ));
    }
}

fn finding(
    policy: &CheckPolicy,
    path: &RepoPath,
    code: &str,
    message: String,
    data: JsonValue,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_FILE_NAMING.to_string(),
        code: code.to_string(),
        message,
        location: Some(Location {
            path: path.clone(),
            line: None,
            col: None,
        }),
        help: Some("Rename the file to '<ACRONYM>_V<digits>.json' with an acronym of at least 2 characters.".to_string()),
        fingerprint: None,
        data,
    }
}
