//! Lexical path utilities.
//!
//! Rpath math has to describe the output tree as it will exist *after* the
//! action runs, so nothing here touches the filesystem: paths are treated as
//! plain slash-delimited strings.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Split a slash-delimited path into normalized segments.
///
/// Drops empty segments and current-directory (`.`) markers. `..` segments
/// and symlinks are left alone; this is purely lexical.
pub fn normalize(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect()
}

/// Compute the relative path an entity in `from_dir` would use to reach
/// `to_dir`.
///
/// The common prefix is found by pairwise segment comparison, stopping at the
/// first mismatch. One `..` is emitted per remaining `from` segment, followed
/// by the remaining `to` segments. The result never has a leading slash, and
/// is empty when both directories normalize to the same segments.
///
/// Both paths must live in the same root hierarchy; segments that merely
/// coincide positionally are treated as common.
pub fn relative(from_dir: &str, to_dir: &str) -> String {
    let from = normalize(from_dir);
    let to = normalize(to_dir);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::with_capacity(from.len() - common + to.len() - common);
    for _ in common..from.len() {
        segments.push("..");
    }
    segments.extend_from_slice(&to[common..]);
    segments.join("/")
}

/// Collect the distinct containing directories of a set of files, in order
/// of first appearance.
pub fn dir_names(files: &[PathBuf]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dirs = Vec::new();

    for file in files {
        let dir = file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_string_lossy()
            .into_owned();
        if seen.insert(dir.clone()) {
            dirs.push(dir);
        }
    }

    dirs
}
