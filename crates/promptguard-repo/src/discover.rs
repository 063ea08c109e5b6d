use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use promptguard_domain::model::LayoutModel;
use promptguard_types::RepoPath;
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Name of the mirror tree compared against content directories.
pub const YAML_MIRROR_DIR: &str = "YAML-versions";

/// Top-level directories that are never content directories: version control,
/// CI config, and the mirror tree itself. The set is literal; other
/// dot-directories at the root do count as content.
pub const LAYOUT_EXCLUDED_DIRS: [&str; 3] = [".git", ".github", YAML_MIRROR_DIR];

/// Discover all `.json` files under `repo_root`, repo-relative, in stable order.
///
/// Directories whose name starts with `.` are skipped at every depth, which
/// excludes version-control metadata uniformly. Unreadable subtrees are
/// skipped rather than failing the walk; a completely unlistable root is
/// caught by [`read_layout`] before this runs.
pub fn discover_prompts(repo_root: &Utf8Path) -> Vec<RepoPath> {
    let mut out: Vec<RepoPath> = Vec::new();

    for abs in WalkDir::new(repo_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.file_name()
                    .to_str()
                    .map(|n| n.ends_with(".json"))
                    .unwrap_or(false)
        })
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let rel = abs
            .strip_prefix(repo_root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");
        out.push(RepoPath::new(&rel));
    }

    // Stable order.
    out.sort();
    out.dedup();

    out
}

/// Read the immediate-subdirectory name sets for the layout check.
///
/// This is the only place the run can fail outright: a root that cannot be
/// listed leaves nothing to validate.
pub fn read_layout(repo_root: &Utf8Path) -> anyhow::Result<LayoutModel> {
    let mut content_dirs = BTreeSet::new();
    for entry in std::fs::read_dir(repo_root).with_context(|| format!("read dir {repo_root}"))? {
        let entry = entry.with_context(|| format!("read dir {repo_root}"))?;
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if LAYOUT_EXCLUDED_DIRS.contains(&name) {
            continue;
        }
        content_dirs.insert(name.to_string());
    }

    let mut mirror_dirs = BTreeSet::new();
    let mirror_root = repo_root.join(YAML_MIRROR_DIR);
    if mirror_root.is_dir() {
        for entry in
            std::fs::read_dir(&mirror_root).with_context(|| format!("read dir {mirror_root}"))?
        {
            let entry = entry.with_context(|| format!("read dir {mirror_root}"))?;
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                mirror_dirs.insert(name.to_string());
            }
        }
    }

    Ok(LayoutModel {
        content_dirs,
        mirror_dirs,
    })
}

fn is_hidden_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
