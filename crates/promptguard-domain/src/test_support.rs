//! Shared fixture builders for domain tests.

use crate::model::{LayoutModel, PromptFileModel, PromptSource, RepoModel};
use crate::policy::{
    CheckPolicy, EffectiveConfig, FailOn, DEFAULT_MAX_STRING_LEN, DEFAULT_RECOMMENDED_FIELDS,
};
use promptguard_types::{ids, RepoPath, Severity};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet};

pub fn default_config() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_FILE_SYNTAX.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    for check_id in [
        ids::CHECK_PROMPT_STRUCTURE,
        ids::CHECK_FILE_NAMING,
        ids::CHECK_LAYOUT_MIRROR,
    ] {
        checks.insert(check_id.to_string(), CheckPolicy::enabled(Severity::Warning));
    }

    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        max_string_len: DEFAULT_MAX_STRING_LEN,
        recommended_fields: DEFAULT_RECOMMENDED_FIELDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        checks,
    }
}

/// Config with a single enabled check; everything else off.
pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut cfg = default_config();
    cfg.checks = BTreeMap::new();
    cfg.checks
        .insert(check_id.to_string(), CheckPolicy::enabled(severity));
    cfg
}

pub fn parsed_prompt(path: &str, value: JsonValue) -> PromptFileModel {
    PromptFileModel {
        path: RepoPath::new(path),
        source: PromptSource::Parsed(value),
    }
}

pub fn syntax_error_prompt(path: &str, line: u32, column: u32, message: &str) -> PromptFileModel {
    PromptFileModel {
        path: RepoPath::new(path),
        source: PromptSource::SyntaxError {
            line,
            column,
            message: message.to_string(),
        },
    }
}

pub fn unreadable_prompt(path: &str, message: &str) -> PromptFileModel {
    PromptFileModel {
        path: RepoPath::new(path),
        source: PromptSource::Unreadable {
            message: message.to_string(),
        },
    }
}

pub fn model(prompts: Vec<PromptFileModel>) -> RepoModel {
    model_with_layout(prompts, &[], &[])
}

pub fn model_with_layout(
    prompts: Vec<PromptFileModel>,
    content_dirs: &[&str],
    mirror_dirs: &[&str],
) -> RepoModel {
    RepoModel {
        repo_root: RepoPath::new("."),
        layout: LayoutModel {
            content_dirs: to_set(content_dirs),
            mirror_dirs: to_set(mirror_dirs),
        },
        prompts,
    }
}

fn to_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
