use crate::model::{PromptSource, RepoModel};
use crate::policy::EffectiveConfig;
use promptguard_types::{ids, Finding, Location};
use serde_json::json;

/// Surface read/parse failures recorded in the model as findings.
///
/// Unreadable files and invalid JSON are distinct codes; neither aborts the
/// run, and both exclude the file from the structure and naming checks.
pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_FILE_SYNTAX) else {
        return;
    };

    for prompt in &model.prompts {
        match &prompt.source {
            PromptSource::Parsed(_) => {}
            PromptSource::SyntaxError {
                line,
                column,
                message,
            } => {
                out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_FILE_SYNTAX.to_string(),
                    code: ids::CODE_INVALID_JSON.to_string(),
                    message: format!("JSON syntax error: {message}"),
                    location: Some(Location {
                        path: prompt.path.clone(),
                        line: Some(*line),
                        col: Some(*column),
                    }),
                    help: Some(
                        "Fix the JSON syntax; structure and naming checks are skipped until the file parses."
                            .to_string(),
                    ),
                    fingerprint: None,
                    data: json!({
                        "line": line,
                        "column": column,
                    }),
                });
            }
            PromptSource::Unreadable { message } => {
                out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_FILE_SYNTAX.to_string(),
                    code: ids::CODE_UNREADABLE_FILE.to_string(),
                    message: format!("error reading file: {message}"),
                    location: Some(Location {
                        path: prompt.path.clone(),
                        line: None,
                        col: None,
                    }),
                    help: None,
                    fingerprint: None,
                    data: serde_json::Value::Null,
                });
            }
        }
    }
}
