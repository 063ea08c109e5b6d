//! Repository adapters: discover prompt files, read directory layout, parse JSON.
//!
//! This crate is allowed to do filesystem IO. Per-file read and parse failures
//! are recorded as model states for the domain to report; only a root that
//! cannot be listed at all is an error.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use promptguard_domain::model::RepoModel;
use promptguard_types::RepoPath;

pub use discover::{discover_prompts, read_layout, LAYOUT_EXCLUDED_DIRS, YAML_MIRROR_DIR};
pub use parse::load_prompt;

/// Build the in-memory repository model used by the hygiene engine.
///
/// `repo_root` is the validation root (typically the working directory).
/// Each discovered file is read and parsed exactly once here; downstream
/// checks share the parsed value.
pub fn build_repo_model(repo_root: &Utf8Path) -> anyhow::Result<RepoModel> {
    let layout = discover::read_layout(repo_root).context("list repository root")?;

    let prompts = discover::discover_prompts(repo_root)
        .iter()
        .map(|path| parse::load_prompt(repo_root, path))
        .collect();

    Ok(RepoModel {
        repo_root: RepoPath::from(repo_root),
        layout,
        prompts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use promptguard_domain::model::PromptSource;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn build_repo_model_reads_each_file_once_into_states() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("prompts/AB_V1.json"), r#"{"task": "t"}"#);
        write_file(&root.join("prompts/BAD_V1.json"), r#"{"task": "t",}"#);
        std::fs::create_dir_all(root.join("YAML-versions/prompts")).expect("mirror");

        let model = build_repo_model(&root).expect("build model");

        assert_eq!(model.prompts.len(), 2);
        assert!(matches!(
            model.prompts[0].source,
            PromptSource::Parsed(_)
        ));
        assert!(matches!(
            model.prompts[1].source,
            PromptSource::SyntaxError { .. }
        ));
        assert!(model.layout.content_dirs.contains("prompts"));
        assert!(model.layout.mirror_dirs.contains("prompts"));
    }

    #[test]
    fn build_repo_model_fails_when_root_is_not_listable() {
        let err = build_repo_model(Utf8Path::new("/nonexistent/promptguard-root")).unwrap_err();
        assert!(err.to_string().contains("list repository root"));
    }
}
