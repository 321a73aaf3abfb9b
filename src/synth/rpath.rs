//! Runtime search path resolution.
//!
//! Binaries that link transitive dynamic libraries need to find them at
//! runtime wherever the output tree gets mounted, so every rpath entry is
//! expressed relative to the loader's own install location rather than as
//! an absolute path.

use std::collections::HashSet;

use crate::util::paths::relative;

/// Loader convention for "the directory containing the loading binary".
pub const ORIGIN: &str = "$ORIGIN";

/// Compute the runtime search path entries for an action.
///
/// `dylib_dirs` are the directories containing the dependency graph's
/// transitive dynamic libraries. The empty set (the common, static-only
/// case) yields no entries. Directories are deduplicated by exact string
/// equality, preserving first-appearance order, and each distinct directory
/// yields one `$ORIGIN/<relative>` entry computed from the action's output
/// directory.
pub fn compute(output_dir: &str, dylib_dirs: &[String]) -> Vec<String> {
    if dylib_dirs.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    dylib_dirs
        .iter()
        .filter(|dir| seen.insert(dir.as_str()))
        .map(|dir| format!("{}/{}", ORIGIN, relative(output_dir, dir)))
        .collect()
}
