//! Resolved toolchain descriptions.
//!
//! Toolchain discovery lives in the surrounding orchestrator; by the time a
//! value lands here every path is final. These types are a read-only view
//! consumed once per action.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A resolved Rust toolchain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainDescriptor {
    /// Path to the compiler executable
    pub rustc: PathBuf,
    /// Path to the documentation generator executable
    pub rustdoc: PathBuf,
    /// Files making up the compiler's runtime library directory
    pub rustc_lib: Vec<PathBuf>,
    /// Files making up the standard library directory
    pub rust_lib: Vec<PathBuf>,
}

/// The host C/C++ toolchain view used for linking.
///
/// rustc drives the host linker for the final link step, so every compile
/// action carries the configured C compiler (as linker driver), archiver,
/// and link options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcToolchain {
    /// Path to the C compiler executable
    pub compiler: PathBuf,
    /// Path to the archiver executable
    pub ar: PathBuf,
    /// Configured link options, in order
    #[serde(default)]
    pub link_options: Vec<String>,
}
