use promptguard_domain::policy::{
    CheckPolicy, EffectiveConfig, FailOn, DEFAULT_MAX_STRING_LEN, DEFAULT_RECOMMENDED_FIELDS,
};
use promptguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "lenient" => lenient_profile(),
        // default
        _ => strict_profile(),
    }
}

/// Any finding fails the run; matches the documented exit contract.
fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        max_string_len: DEFAULT_MAX_STRING_LEN,
        recommended_fields: default_fields(),
        checks: default_checks(),
    }
}

/// Only read/parse failures fail the run; advisory findings still print.
fn lenient_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "lenient".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        max_string_len: DEFAULT_MAX_STRING_LEN,
        recommended_fields: default_fields(),
        checks: default_checks(),
    }
}

fn default_fields() -> Vec<String> {
    DEFAULT_RECOMMENDED_FIELDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_checks() -> BTreeMap<String, CheckPolicy> {
    use promptguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_FILE_SYNTAX.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    m.insert(
        CHECK_PROMPT_STRUCTURE.to_string(),
        CheckPolicy::enabled(Severity::Warning),
    );
    m.insert(
        CHECK_FILE_NAMING.to_string(),
        CheckPolicy::enabled(Severity::Warning),
    );
    m.insert(
        CHECK_LAYOUT_MIRROR.to_string(),
        CheckPolicy::enabled(Severity::Warning),
    );

    m
}
