//! Slipway - rustc action command synthesis for build orchestrators
//!
//! This crate turns a structured description of a build action (what crate
//! to compile, against which resolved toolchain and dependency summary)
//! into the exact, deterministic command string an isolated executor runs.
//! It performs no I/O and spawns nothing; execution, caching, and
//! scheduling belong to the surrounding build system.

pub mod core;
pub mod synth;
pub mod util;

pub use crate::core::{
    action::{CompileRequest, CrateType, DocRequest, DocTestRequest},
    deps::DependencyInfo,
    toolchain::{CcToolchain, ToolchainDescriptor},
};

pub use crate::synth::CommandBuilder;
