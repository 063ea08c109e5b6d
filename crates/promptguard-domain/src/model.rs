use promptguard_types::RepoPath;
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;

/// Everything the checks need, read once from the filesystem by the repo layer.
#[derive(Clone, Debug, Default)]
pub struct RepoModel {
    pub repo_root: RepoPath,

    /// Top-level directory listing used by the layout check.
    pub layout: LayoutModel,

    /// All discovered `.json` prompt files, in discovery order.
    pub prompts: Vec<PromptFileModel>,
}

/// Immediate-subdirectory name sets for the mirror comparison.
#[derive(Clone, Debug, Default)]
pub struct LayoutModel {
    /// Root subdirectories minus the fixed exclusion set.
    pub content_dirs: BTreeSet<String>,
    /// Subdirectories of `YAML-versions` (empty if the mirror is absent).
    pub mirror_dirs: BTreeSet<String>,
}

#[derive(Clone, Debug)]
pub struct PromptFileModel {
    pub path: RepoPath,
    pub source: PromptSource,
}

/// Outcome of the one read+parse pass over a prompt file.
///
/// Failures are model states, not errors: the run always continues and the
/// source check turns them into findings.
#[derive(Clone, Debug)]
pub enum PromptSource {
    Parsed(JsonValue),
    SyntaxError {
        line: u32,
        column: u32,
        message: String,
    },
    Unreadable {
        message: String,
    },
}

impl PromptFileModel {
    /// The parsed value, when the file both read and parsed.
    pub fn parsed(&self) -> Option<&JsonValue> {
        match &self.source {
            PromptSource::Parsed(value) => Some(value),
            _ => None,
        }
    }
}
