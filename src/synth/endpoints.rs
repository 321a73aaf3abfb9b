//! Host toolchain endpoint resolution.

use std::path::PathBuf;

use crate::core::toolchain::CcToolchain;
use crate::util::paths::dir_names;

/// Archiver substituted when the configured one is a libtool wrapper.
pub const AR_FALLBACK: &str = "/usr/bin/ar";

/// Extract the linker and archiver executables from the host C/C++
/// toolchain.
///
/// The linker is the configured C compiler, which drives the actual link.
/// The archiver is the configured `ar`, with one named workaround: macOS
/// toolchains commonly configure a `libtool` wrapper that rejects archiver
/// flags, so a path containing `libtool` is replaced by [`AR_FALLBACK`].
/// Configuring any non-libtool archiver upstream bypasses the substitution.
pub fn resolve_linker_and_archiver(cc: &CcToolchain) -> (PathBuf, PathBuf) {
    let ar = if cc.ar.to_string_lossy().contains("libtool") {
        PathBuf::from(AR_FALLBACK)
    } else {
        cc.ar.clone()
    };

    (cc.compiler.clone(), ar)
}

/// Emit one library search path flag per distinct directory across the
/// given library file sets.
///
/// Directories are deduplicated in order of first appearance. The flags are
/// tagged `all` so they apply to every link kind.
pub fn search_path_flags(file_sets: &[&[PathBuf]]) -> Vec<String> {
    let files: Vec<PathBuf> = file_sets.iter().flat_map(|set| set.iter().cloned()).collect();

    dir_names(&files)
        .into_iter()
        .map(|dir| format!("-L all={}", dir))
        .collect()
}
