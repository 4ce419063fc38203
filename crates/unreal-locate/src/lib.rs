//! `unreal-locate` - infer the Unreal Editor binary and project for an asset.
//!
//! Given any path inside an Unreal project or Engine tree, [`Resolver`] walks
//! its ancestors and returns the editor executable to launch together with the
//! `.uproject` file it should open, if any.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Resolution errors.
pub mod error;
/// Editor binary naming table.
pub mod layout;
/// Editor binary discovery under one root.
pub mod locator;
mod paths;
/// Ancestor walk over Engine and project roots.
pub mod resolver;

pub use error::{LayoutError, LocateError};
pub use layout::{BinaryLayout, Platform};
pub use locator::{locate_binaries, BinaryLocator};
pub use paths::normalize_start_path;
pub use resolver::{BinarySelector, FirstMatch, Resolution, Resolver};
