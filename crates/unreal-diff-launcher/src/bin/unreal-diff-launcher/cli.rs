//! CLI definitions for unreal-diff-launcher.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "unreal-diff-launcher",
    version,
    about = "Open Unreal assets in the Unreal Editor diff/merge tool",
    infer_subcommands = true,
    after_help = "Examples:\n  unreal-diff-launcher diff Content/Hero.uasset /tmp/Hero_REMOTE.uasset\n  unreal-diff-launcher merge $REMOTE $LOCAL $BASE $MERGED\n  unreal-diff-launcher locate Content/Maps/Arena.umap --json"
)]
pub struct Cli {
    /// Show resolution details on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file (defaults to $UNREAL_DIFF_LAUNCHER_CONFIG, then built-ins).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print the editor command line instead of running it.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two versions of an asset.
    Diff {
        /// File shown on the left.
        left: PathBuf,
        /// File shown on the right.
        right: PathBuf,
    },
    /// Three-way merge of an asset into a result file.
    #[command(
        after_help = "The editor and project are inferred from LOCAL, the working-copy file."
    )]
    Merge {
        /// Incoming version to merge into local.
        remote: PathBuf,
        /// Working-copy version.
        local: PathBuf,
        /// Common ancestor of local and remote.
        base: PathBuf,
        /// File the merge result is written to.
        result: PathBuf,
    },
    /// Print the editor and project inferred for a path, without launching.
    Locate {
        /// Asset or any path inside an Unreal project or Engine tree.
        path: PathBuf,
        /// Emit JSON.
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
