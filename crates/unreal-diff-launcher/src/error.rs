//! Launcher errors.

#![allow(missing_docs)]

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;
use unreal_locate::{LayoutError, LocateError};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid config: {0}")]
    InvalidConfig(SmolStr),

    #[error("failed to read config '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidLayout(#[from] LayoutError),

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(
        "failed to find an Unreal project and/or Unreal editor to diff with, based on the left file \"{}\" or the right file \"{}\"",
        .left.display(),
        .right.display()
    )]
    NoEditorForDiff { left: PathBuf, right: PathBuf },

    #[error("failed to start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
