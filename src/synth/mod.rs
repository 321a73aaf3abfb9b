//! Action command synthesis.
//!
//! This module turns structured action descriptions into the exact shell
//! commands an external executor runs: rpath resolution, feature flag
//! translation, host tool endpoint resolution, and the assembly of the
//! three invocation kinds (compile, generate docs, run doc tests).

pub mod command;
pub mod endpoints;
pub mod features;
pub mod rpath;

pub use command::{CommandBuilder, STRICT_PRELUDE};
