use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use promptguard_types::{ids, Finding};
use serde_json::json;

/// Compare top-level content directories against the `YAML-versions` mirror.
///
/// Pure set difference over names; mirrored directory contents are not
/// inspected. One finding per non-empty difference, listing sorted names.
pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_LAYOUT_MIRROR) else {
        return;
    };
    let layout = &model.layout;

    // BTreeSet difference iterates in sorted order.
    let missing: Vec<&str> = layout
        .content_dirs
        .difference(&layout.mirror_dirs)
        .map(|s| s.as_str())
        .collect();
    if !missing.is_empty() {
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_LAYOUT_MIRROR.to_string(),
            code: ids::CODE_MISSING_MIRROR_DIR.to_string(),
            message: format!(
                "missing YAML versions for directories: {}",
                missing.join(", ")
            ),
            location: None,
            help: Some("Create a matching subdirectory under 'YAML-versions'.".to_string()),
            fingerprint: None,
            data: json!({ "directories": missing }),
        });
    }

    let orphaned: Vec<&str> = layout
        .mirror_dirs
        .difference(&layout.content_dirs)
        .map(|s| s.as_str())
        .collect();
    if !orphaned.is_empty() {
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_LAYOUT_MIRROR.to_string(),
            code: ids::CODE_ORPHANED_MIRROR_DIR.to_string(),
            message: format!(
                "YAML directories without corresponding content directories: {}",
                orphaned.join(", ")
            ),
            location: None,
            help: Some("Remove the orphaned mirror directory or add the content directory it mirrors.".to_string()),
            fingerprint: None,
            data: json!({ "directories": orphaned }),
        });
    }
}
