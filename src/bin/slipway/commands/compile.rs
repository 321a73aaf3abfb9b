//! `slipway compile` command

use anyhow::Result;

use slipway::core::CompileAction;
use slipway::CommandBuilder;

use crate::cli::CompileArgs;
use crate::commands::load_action;

pub fn execute(args: CompileArgs) -> Result<()> {
    let action: CompileAction = load_action(&args.action)?;

    let builder = CommandBuilder::new(&action.toolchain, &action.cc_toolchain);
    let cmd = builder.compile_command(&action.request, &action.deps);

    println!("{}", cmd);
    Ok(())
}
