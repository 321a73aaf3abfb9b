//! Command synthesis for compile, doc, and doc-test actions.
//!
//! A `CommandBuilder` is a pure function from structured inputs to the exact
//! shell text an external executor runs. Flag ordering is load-bearing:
//! downstream tooling and the compiler's last-flag-wins semantics both
//! depend on it, and identical inputs must yield byte-identical output
//! because commands are cache keys upstream.

use tracing::debug;

use crate::core::action::{CompileRequest, DocRequest, DocTestRequest};
use crate::core::deps::DependencyInfo;
use crate::core::toolchain::{CcToolchain, ToolchainDescriptor};
use crate::synth::{endpoints, features, rpath};
use crate::util::escape::quote;
use crate::util::hash::metadata_token;
use crate::util::paths::dir_names;

/// Shell prelude that aborts the composed command on the first failing step.
pub const STRICT_PRELUDE: &str = "set -euo pipefail";

/// rustc fails hard when TMPDIR names a directory that does not exist yet.
const TMPDIR_GUARD: &str =
    r#"if [ -n "${TMPDIR:-}" ] && [ ! -d "${TMPDIR}" ]; then mkdir -p "${TMPDIR}"; fi"#;

/// Loader search path variables covering both dynamic-loader conventions
/// across target platforms.
const LOADER_PATH_VARS: [&str; 2] = ["LD_LIBRARY_PATH", "DYLD_LIBRARY_PATH"];

/// Synthesizes executor commands for one toolchain.
#[derive(Debug, Clone, Copy)]
pub struct CommandBuilder<'a> {
    toolchain: &'a ToolchainDescriptor,
    cc: &'a CcToolchain,
}

impl<'a> CommandBuilder<'a> {
    /// Create a builder over a resolved toolchain pair.
    pub fn new(toolchain: &'a ToolchainDescriptor, cc: &'a CcToolchain) -> Self {
        CommandBuilder { toolchain, cc }
    }

    /// Environment assignments pointing both loader conventions at the
    /// compiler's runtime library directories.
    fn loader_env(&self) -> Vec<String> {
        let path = dir_names(&self.toolchain.rustc_lib).join(":");
        LOADER_PATH_VARS
            .iter()
            .map(|var| format!("{}={}", var, quote(&path)))
            .collect()
    }

    /// Synthesize the compile command for one crate.
    ///
    /// Returns a single `;`-joined command string under [`STRICT_PRELUDE`].
    pub fn compile_command(&self, request: &CompileRequest, deps: &DependencyInfo) -> String {
        let (linker, ar) = endpoints::resolve_linker_and_archiver(self.cc);
        let output_dir = request.output_dir.to_string_lossy();
        let rpaths = rpath::compute(&output_dir, &dir_names(&deps.transitive_dylibs));

        let mut stmts: Vec<String> = Vec::new();
        stmts.push(STRICT_PRELUDE.to_string());
        stmts.push(TMPDIR_GUARD.to_string());
        stmts.extend(deps.setup_cmds.iter().cloned());

        let mut argv: Vec<String> = self.loader_env();
        for (name, value) in &deps.env_vars {
            argv.push(format!("{}={}", name, quote(value)));
        }

        argv.push(quote(&self.toolchain.rustc.to_string_lossy()));
        argv.push(quote(&request.src.to_string_lossy()));
        argv.push(format!("--crate-name {}", quote(&request.crate_name)));
        argv.push(format!("--crate-type {}", request.crate_type.as_str()));
        argv.push("-C opt-level=3".to_string());
        argv.push(format!("-C metadata={}", metadata_token(&request.src)));
        argv.push(format!("-C ar={}", quote(&ar.to_string_lossy())));
        argv.push(format!("-C linker={}", quote(&linker.to_string_lossy())));
        argv.push(format!(
            "-C link-args={}",
            quote(&self.cc.link_options.join(" "))
        ));
        argv.push(format!("--out-dir {}", quote(&output_dir)));
        argv.push("--emit=dep-info,link".to_string());

        for entry in &rpaths {
            argv.push(format!(
                "-C {}",
                quote(&format!("link-arg=-Wl,-rpath,{}", entry))
            ));
        }

        argv.extend(features::cfg_flags(&request.features));
        argv.extend(request.rust_flags.iter().cloned());
        argv.extend(endpoints::search_path_flags(&[&self.toolchain.rust_lib]));
        argv.extend(deps.search_flags.iter().cloned());
        argv.extend(deps.link_flags.iter().cloned());
        argv.extend(request.rustc_flags.iter().cloned());

        stmts.push(argv.join(" "));

        debug!(
            crate_name = %request.crate_name,
            crate_type = %request.crate_type,
            rpaths = rpaths.len(),
            features = request.features.len(),
            "synthesized compile command"
        );

        stmts.join("; ")
    }

    /// Synthesize the documentation-generation command.
    ///
    /// The scratch directory is recreated from empty, the generator writes
    /// into it, and the resulting tree is packed into one compressed archive
    /// moved to the requested output location.
    pub fn doc_command(&self, request: &DocRequest, deps: &DependencyInfo) -> String {
        let scratch = quote(&request.scratch_dir.to_string_lossy());
        let output = quote(&request.output.to_string_lossy());

        let mut stmts: Vec<String> = Vec::new();
        stmts.push(STRICT_PRELUDE.to_string());
        stmts.extend(deps.setup_cmds.iter().cloned());
        stmts.push(format!("rm -rf {}", scratch));
        stmts.push(format!("mkdir -p {}", scratch));

        let mut argv: Vec<String> = self.loader_env();
        argv.push(quote(&self.toolchain.rustdoc.to_string_lossy()));
        argv.push(quote(&request.lib_root.to_string_lossy()));
        argv.push(format!("--crate-name {}", quote(&request.crate_name)));
        argv.extend(endpoints::search_path_flags(&[&self.toolchain.rust_lib]));
        argv.push(format!("-o {}", scratch));
        argv.extend(request.doc_flags.iter().cloned());
        argv.extend(deps.search_flags.iter().cloned());
        argv.extend(deps.link_flags.iter().cloned());
        stmts.push(argv.join(" "));

        stmts.push(format!("tar -czf {}.tmp -C {} .", output, scratch));
        stmts.push(format!("mv {}.tmp {}", output, output));

        debug!(crate_name = %request.crate_name, "synthesized doc command");

        stmts.join("; ")
    }

    /// Synthesize the documentation-test script.
    ///
    /// Unlike the other two entry points this returns a standalone script
    /// with an interpreter directive, because the test runner executes it
    /// directly as a test entry point.
    pub fn doc_test_script(&self, request: &DocTestRequest, deps: &DependencyInfo) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("#!/usr/bin/env bash".to_string());
        lines.push(STRICT_PRELUDE.to_string());
        lines.extend(deps.setup_cmds.iter().cloned());

        let mut argv: Vec<String> = self.loader_env();
        argv.push(quote(&self.toolchain.rustdoc.to_string_lossy()));
        argv.push("--test".to_string());
        argv.push(quote(&request.lib_root.to_string_lossy()));
        argv.push(format!("--crate-name {}", quote(&request.crate_name)));
        argv.extend(endpoints::search_path_flags(&[&self.toolchain.rust_lib]));
        argv.extend(deps.search_flags.iter().cloned());
        argv.extend(deps.link_flags.iter().cloned());
        lines.push(argv.join(" "));

        debug!(crate_name = %request.crate_name, "synthesized doc-test script");

        let mut script = lines.join("\n");
        script.push('\n');
        script
    }
}
