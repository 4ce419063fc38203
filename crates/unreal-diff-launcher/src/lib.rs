//! `unreal-diff-launcher` - open Unreal assets in the editor's diff/merge mode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Launcher configuration (TOML).
pub mod config;
/// Launcher errors.
pub mod error;
/// Which input file drives editor inference.
pub mod infer;
/// Editor command lines.
pub mod invocation;

pub use config::{LauncherConfig, LogLevel};
pub use error::LaunchError;
pub use invocation::{EditorInvocation, EditorMode};
