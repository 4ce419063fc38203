//! Picks which input file drives editor inference for each mode.

use std::path::Path;

use tracing::debug;
use unreal_locate::{BinarySelector, Resolution, Resolver};

use crate::error::LaunchError;

/// Infers from `left`, then from `right` when `left` sits outside any
/// Engine or project tree (version control hands one side over as a temp
/// file). An ambiguous project on either side fails immediately.
pub fn infer_for_diff<S: BinarySelector>(
    resolver: &Resolver<S>,
    left: &Path,
    right: &Path,
) -> Result<Resolution, LaunchError> {
    for side in [left, right] {
        match resolver.resolve(side) {
            Ok(resolution) => return Ok(resolution),
            Err(err) if err.is_not_found() => {
                debug!(path = %side.display(), "no editor found from this side");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(LaunchError::NoEditorForDiff {
        left: left.to_path_buf(),
        right: right.to_path_buf(),
    })
}

/// Merge always has a working-copy `local` file; only it is consulted.
pub fn infer_for_merge<S: BinarySelector>(
    resolver: &Resolver<S>,
    local: &Path,
) -> Result<Resolution, LaunchError> {
    Ok(resolver.resolve(local)?)
}
