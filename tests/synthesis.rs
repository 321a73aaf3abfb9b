//! End-to-end command synthesis scenarios.

use std::path::PathBuf;

use slipway::synth::STRICT_PRELUDE;
use slipway::{
    CcToolchain, CommandBuilder, CompileRequest, CrateType, DependencyInfo, ToolchainDescriptor,
};

fn toolchain() -> ToolchainDescriptor {
    ToolchainDescriptor {
        rustc: PathBuf::from("/bin/rc"),
        rustdoc: PathBuf::from("/bin/rcdoc"),
        rustc_lib: vec![PathBuf::from("/rc/lib/librc_driver.so")],
        rust_lib: vec![],
    }
}

fn cc_toolchain() -> CcToolchain {
    CcToolchain {
        compiler: PathBuf::from("/usr/bin/cc"),
        ar: PathBuf::from("/usr/bin/ar"),
        link_options: vec![],
    }
}

fn request() -> CompileRequest {
    CompileRequest {
        crate_name: "foo".to_string(),
        crate_type: CrateType::Lib,
        src: PathBuf::from("src/lib.src"),
        output_dir: PathBuf::from("out/"),
        features: vec![],
        rust_flags: vec![],
        rustc_flags: vec![],
    }
}

fn deps() -> DependencyInfo {
    DependencyInfo {
        search_flags: vec!["-L/deps".to_string()],
        ..Default::default()
    }
}

/// Position of `needle` in `haystack`, asserting it occurs exactly once.
fn pos(haystack: &str, needle: &str) -> usize {
    assert_eq!(
        haystack.matches(needle).count(),
        1,
        "expected exactly one occurrence of `{}` in `{}`",
        needle,
        haystack
    );
    haystack.find(needle).unwrap()
}

#[test]
fn compile_command_orders_every_section() {
    let tc = toolchain();
    let cc = cc_toolchain();
    let cmd = CommandBuilder::new(&tc, &cc).compile_command(&request(), &deps());

    let order = [
        STRICT_PRELUDE,
        "; LD_LIBRARY_PATH=/rc/lib",
        "DYLD_LIBRARY_PATH=/rc/lib",
        "/bin/rc src/lib.src",
        "--crate-name foo",
        "--crate-type lib",
        "-C opt-level=3",
        "-C metadata=",
        "-C ar=/usr/bin/ar",
        "-C linker=/usr/bin/cc",
        "--out-dir out/",
        "--emit=dep-info,link",
        "-L/deps",
    ];

    let mut last = 0;
    for needle in order {
        let at = pos(&cmd, needle);
        assert!(at >= last, "`{}` out of order in `{}`", needle, cmd);
        last = at;
    }

    // No dylibs, no features: no rpath or cfg flags anywhere.
    assert!(!cmd.contains("-rpath"));
    assert!(!cmd.contains("--cfg"));

    // The dependency search flag is the final fragment.
    assert!(cmd.ends_with("-L/deps"));
}

#[test]
fn compile_command_is_byte_identical_for_equal_inputs() {
    let tc = toolchain();
    let cc = cc_toolchain();

    let a = CommandBuilder::new(&tc, &cc).compile_command(&request(), &deps());
    let b = CommandBuilder::new(&tc.clone(), &cc.clone()).compile_command(&request(), &deps());

    assert_eq!(a, b);
}

#[test]
fn compile_command_emits_rpaths_for_transitive_dylibs() {
    let tc = toolchain();
    let cc = cc_toolchain();
    let deps = DependencyInfo {
        transitive_dylibs: vec![
            PathBuf::from("out/deps/liba.so"),
            PathBuf::from("out/deps/libb.so"),
            PathBuf::from("out/ext/libc.so"),
        ],
        ..Default::default()
    };

    let mut req = request();
    req.output_dir = PathBuf::from("out/bin");
    let cmd = CommandBuilder::new(&tc, &cc).compile_command(&req, &deps);

    // Two distinct dylib directories, two rpath flags, input order.
    let deps_rpath = pos(&cmd, "'link-arg=-Wl,-rpath,$ORIGIN/../deps'");
    let ext_rpath = pos(&cmd, "'link-arg=-Wl,-rpath,$ORIGIN/../ext'");
    assert!(deps_rpath < ext_rpath);
    assert_eq!(cmd.matches("-rpath").count(), 2);
}

#[test]
fn feature_flags_appear_in_request_order() {
    let tc = toolchain();
    let cc = cc_toolchain();
    let mut req = request();
    req.features = vec!["foo".to_string(), "bar".to_string()];

    let cmd = CommandBuilder::new(&tc, &cc).compile_command(&req, &deps());

    let foo = pos(&cmd, "--cfg 'feature=\"foo\"'");
    let bar = pos(&cmd, "--cfg 'feature=\"bar\"'");
    assert!(foo < bar);
    assert_eq!(cmd.matches("--cfg").count(), 2);
}
