//! `slipway doctest` command

use anyhow::Result;

use slipway::core::DocTestAction;
use slipway::CommandBuilder;

use crate::cli::DoctestArgs;
use crate::commands::load_action;

pub fn execute(args: DoctestArgs) -> Result<()> {
    let action: DocTestAction = load_action(&args.action)?;

    let builder = CommandBuilder::new(&action.toolchain, &action.cc_toolchain);
    let script = builder.doc_test_script(&action.request, &action.deps);

    // The script already ends with a newline; print it verbatim.
    print!("{}", script);
    Ok(())
}
