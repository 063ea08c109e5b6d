use camino::Utf8Path;
use promptguard_domain::model::{PromptFileModel, PromptSource};
use promptguard_types::RepoPath;
use serde_json::Value as JsonValue;

/// Read and parse one prompt file into its model state.
///
/// Never fails the run: an unreadable file (missing, permission denied,
/// invalid UTF-8) becomes `Unreadable`; invalid JSON becomes `SyntaxError`
/// with the parser's position. A parsed value is produced once and shared by
/// every downstream check.
pub fn load_prompt(repo_root: &Utf8Path, path: &RepoPath) -> PromptFileModel {
    let abs = repo_root.join(path.as_str());

    let source = match std::fs::read_to_string(&abs) {
        Err(err) => PromptSource::Unreadable {
            message: err.to_string(),
        },
        Ok(text) => match serde_json::from_str::<JsonValue>(&text) {
            Ok(value) => PromptSource::Parsed(value),
            Err(err) => PromptSource::SyntaxError {
                line: err.line() as u32,
                column: err.column() as u32,
                message: err.to_string(),
            },
        },
    };

    PromptFileModel {
        path: path.clone(),
        source,
    }
}
