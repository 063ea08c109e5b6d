use promptguard_types::Severity;
use std::collections::BTreeMap;

/// Fields every prompt document is expected to carry at the top level.
pub const DEFAULT_RECOMMENDED_FIELDS: [&str; 3] = ["task", "description", "parameters"];

/// String leaves longer than this (in chars) are flagged by the structure check.
pub const DEFAULT_MAX_STRING_LEN: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub max_string_len: usize,
    pub recommended_fields: Vec<String>,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
