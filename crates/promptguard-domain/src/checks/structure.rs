use crate::model::RepoModel;
use crate::policy::{CheckPolicy, EffectiveConfig};
use promptguard_types::{ids, Finding, Location, RepoPath};
use serde_json::{json, Value as JsonValue};

/// Structural checks over each parsed prompt document.
///
/// All findings here are advisory: a missing field never prevents the rest of
/// the document from being inspected.
pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_PROMPT_STRUCTURE) else {
        return;
    };

    for prompt in &model.prompts {
        let Some(value) = prompt.parsed() else {
            continue;
        };
        check_document(&prompt.path, value, cfg, policy, out);
    }
}

fn check_document(
    path: &RepoPath,
    value: &JsonValue,
    cfg: &EffectiveConfig,
    policy: &CheckPolicy,
    out: &mut Vec<Finding>,
) {
    match value.as_object() {
        Some(obj) => {
            for field in &cfg.recommended_fields {
                if !obj.contains_key(field.as_str()) {
                    out.push(finding(
                        policy,
                        path,
                        ids::CODE_MISSING_RECOMMENDED_FIELD,
                        format!("missing recommended field '{field}'"),
                        None,
                        json!({ "field": field }),
                    ));
                }
            }

            if let Some(task) = obj.get("task") {
                let non_empty = task
                    .as_str()
                    .map(|s| !s.trim().is_empty())
                    .unwrap_or(false);
                if !non_empty {
                    out.push(finding(
                        policy,
                        path,
                        ids::CODE_TASK_NOT_STRING,
                        "field 'task' should be a non-empty string".to_string(),
                        None,
                        JsonValue::Null,
                    ));
                }
            }
        }
        None => {
            out.push(finding(
                policy,
                path,
                ids::CODE_TOP_LEVEL_NOT_OBJECT,
                "top-level value should be a JSON object".to_string(),
                None,
                JsonValue::Null,
            ));
        }
    }

    walk_strings(path, value, "", cfg, policy, out);
}

/// Recursive scan for oversized string leaves, tracking a dotted/bracketed
/// value path (`key.subkey`, `key[index]`). Objects iterate in source key
/// order, so finding order is reproducible per input.
fn walk_strings(
    file: &RepoPath,
    value: &JsonValue,
    path: &str,
    cfg: &EffectiveConfig,
    policy: &CheckPolicy,
    out: &mut Vec<Finding>,
) {
    match value {
        JsonValue::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk_strings(file, child, &child_path, cfg, policy, out);
            }
        }
        JsonValue::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk_strings(file, child, &format!("{path}[{index}]"), cfg, policy, out);
            }
        }
        JsonValue::String(s) => {
            let chars = s.chars().count();
            if chars > cfg.max_string_len {
                let shown = if path.is_empty() { "(root)" } else { path };
                out.push(finding(
                    policy,
                    file,
                    ids::CODE_OVERSIZED_STRING,
                    format!("very long string at {shown} ({chars} chars)"),
                    Some("Consider splitting long text into smaller parts.".to_string()),
                    json!({ "path": shown, "chars": chars }),
                ));
            }
        }
        _ => {}
    }
}

fn finding(
    policy: &CheckPolicy,
    path: &RepoPath,
    code: &str,
    message: String,
    help: Option<String>,
    data: JsonValue,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_PROMPT_STRUCTURE.to_string(),
        code: code.to_string(),
        message,
        location: Some(Location {
            path: path.clone(),
            line: None,
            col: None,
        }),
        help,
        fingerprint: None,
        data,
    }
}
