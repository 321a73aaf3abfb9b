//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Slipway - synthesize rustc and rustdoc action commands
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the compile command for an action description
    Compile(CompileArgs),

    /// Print the documentation-generation command for an action description
    Doc(DocArgs),

    /// Print the documentation-test script for an action description
    Doctest(DoctestArgs),
}

#[derive(Args)]
pub struct CompileArgs {
    /// Path to the JSON action description
    #[arg(long)]
    pub action: PathBuf,
}

#[derive(Args)]
pub struct DocArgs {
    /// Path to the JSON action description
    #[arg(long)]
    pub action: PathBuf,
}

#[derive(Args)]
pub struct DoctestArgs {
    /// Path to the JSON action description
    #[arg(long)]
    pub action: PathBuf,
}
