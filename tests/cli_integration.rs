//! CLI integration tests for Slipway.
//!
//! These tests drive the binary over real action-description files.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the slipway binary command.
fn slipway() -> Command {
    Command::cargo_bin("slipway").unwrap()
}

/// Create a temporary directory for action files.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

const TOOLCHAIN_JSON: &str = r#"
    "toolchain": {
        "rustc": "/toolchain/bin/rustc",
        "rustdoc": "/toolchain/bin/rustdoc",
        "rustc_lib": ["/toolchain/lib/librustc_driver.so"],
        "rust_lib": ["/toolchain/rustlib/libstd.rlib"]
    },
    "cc_toolchain": {
        "compiler": "/usr/bin/cc",
        "ar": "/usr/bin/ar",
        "link_options": ["-fuse-ld=lld"]
    }
"#;

// ============================================================================
// slipway compile
// ============================================================================

#[test]
fn test_compile_prints_command() {
    let tmp = temp_dir();
    let action = tmp.path().join("compile.json");
    fs::write(
        &action,
        format!(
            r#"{{
                {TOOLCHAIN_JSON},
                "deps": {{
                    "search_flags": ["-L dependency=out/deps"]
                }},
                "request": {{
                    "crate_name": "demo",
                    "crate_type": "rlib",
                    "src": "src/lib.rs",
                    "output_dir": "out/demo",
                    "features": ["serde"]
                }}
            }}"#
        ),
    )
    .unwrap();

    slipway()
        .args(["compile", "--action", action.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("set -euo pipefail"))
        .stdout(predicate::str::contains("/toolchain/bin/rustc src/lib.rs"))
        .stdout(predicate::str::contains("--crate-name demo"))
        .stdout(predicate::str::contains("--crate-type rlib"))
        .stdout(predicate::str::contains("--cfg 'feature=\"serde\"'"))
        .stdout(predicate::str::contains("-L dependency=out/deps"));
}

#[test]
fn test_compile_fails_on_missing_action_file() {
    slipway()
        .args(["compile", "--action", "no/such/action.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read action description"));
}

#[test]
fn test_compile_fails_on_malformed_action_file() {
    let tmp = temp_dir();
    let action = tmp.path().join("broken.json");
    fs::write(&action, "{ not json").unwrap();

    slipway()
        .args(["compile", "--action", action.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse action description"));
}

// ============================================================================
// slipway doc
// ============================================================================

#[test]
fn test_doc_prints_archive_pipeline() {
    let tmp = temp_dir();
    let action = tmp.path().join("doc.json");
    fs::write(
        &action,
        format!(
            r#"{{
                {TOOLCHAIN_JSON},
                "request": {{
                    "crate_name": "demo",
                    "lib_root": "src/lib.rs",
                    "scratch_dir": "out/demo-docs",
                    "output": "out/demo-docs.tar.gz"
                }}
            }}"#
        ),
    )
    .unwrap();

    slipway()
        .args(["doc", "--action", action.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("rm -rf out/demo-docs"))
        .stdout(predicate::str::contains("/toolchain/bin/rustdoc src/lib.rs"))
        .stdout(predicate::str::contains("tar -czf out/demo-docs.tar.gz.tmp"))
        .stdout(predicate::str::contains("mv out/demo-docs.tar.gz.tmp out/demo-docs.tar.gz"));
}

// ============================================================================
// slipway doctest
// ============================================================================

#[test]
fn test_doctest_prints_script_with_shebang() {
    let tmp = temp_dir();
    let action = tmp.path().join("doctest.json");
    fs::write(
        &action,
        format!(
            r#"{{
                {TOOLCHAIN_JSON},
                "request": {{
                    "crate_name": "demo",
                    "lib_root": "src/lib.rs"
                }}
            }}"#
        ),
    )
    .unwrap();

    slipway()
        .args(["doctest", "--action", action.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/usr/bin/env bash\n"))
        .stdout(predicate::str::contains("--test src/lib.rs"))
        .stdout(predicate::str::contains("--crate-name demo"));
}
