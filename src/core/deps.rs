//! Dependency summaries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Precomputed summary of a target's resolved dependency graph.
///
/// Produced once per target by the dependency-resolution stage and consumed
/// read-only. Every sequence is ordered: search and link flags are emitted
/// exactly as given, since reordering can change symbol resolution in the
/// underlying compiler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyInfo {
    /// Shell commands that must run before the main tool invocation
    /// (e.g. staging directory creation)
    #[serde(default)]
    pub setup_cmds: Vec<String>,

    /// Environment variable assignments for the main invocation
    #[serde(default)]
    pub env_vars: Vec<(String, String)>,

    /// Library search path flags, pre-rendered
    #[serde(default)]
    pub search_flags: Vec<String>,

    /// Link flags, pre-rendered
    #[serde(default)]
    pub link_flags: Vec<String>,

    /// Transitive dynamic libraries needed at the produced binary's runtime
    #[serde(default)]
    pub transitive_dylibs: Vec<PathBuf>,
}
