//! Shell completions generator.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn run_completions(shell: Shell) -> anyhow::Result<i32> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "unreal-diff-launcher", &mut std::io::stdout());
    Ok(0)
}
