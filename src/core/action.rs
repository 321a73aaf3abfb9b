//! Action description types.
//!
//! An action is one unit of work for the external executor: a request
//! describing what to build, plus the toolchain and dependency context it
//! builds against. Requests are constructed fresh per action and discarded
//! once the command string is returned.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::deps::DependencyInfo;
use crate::core::toolchain::{CcToolchain, ToolchainDescriptor};

/// The output kind of a compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrateType {
    /// Library in the compiler's preferred format
    Lib,
    /// Rust static library
    Rlib,
    /// Rust dynamic library
    Dylib,
    /// Native static library
    Staticlib,
    /// Native dynamic library
    Cdylib,
    /// Procedural macro library
    ProcMacro,
    /// Executable binary
    Bin,
}

/// Error for an unrecognized crate type name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown crate type `{0}`; expected one of lib, rlib, dylib, staticlib, cdylib, proc-macro, bin")]
pub struct CrateTypeParseError(String);

impl CrateType {
    /// The flag value understood by the compiler's `--crate-type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrateType::Lib => "lib",
            CrateType::Rlib => "rlib",
            CrateType::Dylib => "dylib",
            CrateType::Staticlib => "staticlib",
            CrateType::Cdylib => "cdylib",
            CrateType::ProcMacro => "proc-macro",
            CrateType::Bin => "bin",
        }
    }

    /// Check if this kind produces a library artifact.
    pub fn is_library(&self) -> bool {
        !matches!(self, CrateType::Bin)
    }
}

impl fmt::Display for CrateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrateType {
    type Err = CrateTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lib" => Ok(CrateType::Lib),
            "rlib" => Ok(CrateType::Rlib),
            "dylib" => Ok(CrateType::Dylib),
            "staticlib" => Ok(CrateType::Staticlib),
            "cdylib" => Ok(CrateType::Cdylib),
            "proc-macro" => Ok(CrateType::ProcMacro),
            "bin" => Ok(CrateType::Bin),
            _ => Err(CrateTypeParseError(s.to_string())),
        }
    }
}

/// One compile action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Crate name passed to `--crate-name`
    pub crate_name: String,

    /// Output kind
    pub crate_type: CrateType,

    /// Root source file
    pub src: PathBuf,

    /// Directory the compiler writes outputs into
    pub output_dir: PathBuf,

    /// Named features to enable, in order
    #[serde(default)]
    pub features: Vec<String>,

    /// Raw flags inserted before the dependency flags
    #[serde(default)]
    pub rust_flags: Vec<String>,

    /// Raw flags appended last, so they win where the compiler honors
    /// last-flag-wins semantics
    #[serde(default)]
    pub rustc_flags: Vec<String>,
}

/// One documentation-generation action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocRequest {
    /// Crate name passed to `--crate-name`
    pub crate_name: String,

    /// The library's root source file
    pub lib_root: PathBuf,

    /// Scratch directory the doc generator writes into; removed and
    /// recreated on every run
    pub scratch_dir: PathBuf,

    /// Where the compressed documentation archive ends up
    pub output: PathBuf,

    /// Raw doc-generator flags
    #[serde(default)]
    pub doc_flags: Vec<String>,
}

/// One documentation-test action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTestRequest {
    /// Crate name passed to `--crate-name`
    pub crate_name: String,

    /// The library's root source file
    pub lib_root: PathBuf,
}

/// A complete compile action description, as consumed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileAction {
    pub toolchain: ToolchainDescriptor,
    pub cc_toolchain: CcToolchain,
    #[serde(default)]
    pub deps: DependencyInfo,
    pub request: CompileRequest,
}

/// A complete documentation action description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocAction {
    pub toolchain: ToolchainDescriptor,
    pub cc_toolchain: CcToolchain,
    #[serde(default)]
    pub deps: DependencyInfo,
    pub request: DocRequest,
}

/// A complete documentation-test action description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTestAction {
    pub toolchain: ToolchainDescriptor,
    pub cc_toolchain: CcToolchain,
    #[serde(default)]
    pub deps: DependencyInfo,
    pub request: DocTestRequest,
}
