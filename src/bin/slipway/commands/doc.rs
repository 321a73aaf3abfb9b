//! `slipway doc` command

use anyhow::Result;

use slipway::core::DocAction;
use slipway::CommandBuilder;

use crate::cli::DocArgs;
use crate::commands::load_action;

pub fn execute(args: DocArgs) -> Result<()> {
    let action: DocAction = load_action(&args.action)?;

    let builder = CommandBuilder::new(&action.toolchain, &action.cc_toolchain);
    let cmd = builder.doc_command(&action.request, &action.deps);

    println!("{}", cmd);
    Ok(())
}
