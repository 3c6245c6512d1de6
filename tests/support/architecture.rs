//! Source scanning helpers for the architecture contract tests.
//!
//! Hits are reported as `(relative path, 1-based line, line text)`. Comment
//! lines are never reported, so doc links may name any layer.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            walk(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Every `.rs` file under `relative_dir` with its contents, sorted by path.
fn sources(relative_dir: &str) -> Vec<(String, String)> {
    let mut files = Vec::new();
    walk(&root().join(relative_dir), &mut files);
    files.sort();
    files
        .into_iter()
        .map(|file| {
            let content = fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
            (relative_path(&file), content)
        })
        .collect()
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (path, content) in sources(relative_dir) {
        for (idx, line) in content.lines().enumerate() {
            if !is_comment(line) && patterns.iter().any(|p| line.contains(p)) {
                hits.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
    hits
}

pub fn find_lines_containing_except_files(
    relative_dir: &str,
    patterns: &[&str],
    allowed_relative_files: &[&str],
) -> Vec<Hit> {
    let allowed: HashSet<&str> = allowed_relative_files.iter().copied().collect();
    find_lines_containing(relative_dir, patterns)
        .into_iter()
        .filter(|(path, _, _)| !allowed.contains(path.as_str()))
        .collect()
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}

/// Lines in `mod.rs` files that are neither module declarations, `cfg`
/// attributes, comments nor blank.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    let mut violations = Vec::new();
    for (path, content) in sources(relative_dir) {
        if !path.ends_with("/mod.rs") {
            continue;
        }
        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            let allowed = line.is_empty()
                || is_comment(line)
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg");
            if !allowed {
                violations.push((path.clone(), idx + 1, raw_line.to_string()));
            }
        }
    }
    violations
}
