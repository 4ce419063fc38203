//! Resolution errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`crate::Resolver::resolve`].
#[derive(Debug, Error)]
pub enum LocateError {
    /// No ancestor of the input is a usable Engine or project root.
    #[error(
        "could not find an Unreal editor for \"{}\": no Engine or project root with editor binaries above it",
        .path.display()
    )]
    NotFound {
        /// The normalized input path.
        path: PathBuf,
    },

    /// A candidate project root holds more than one project descriptor.
    #[error(
        "could not deduce the Unreal editor to use for \"{}\": multiple *.uproject files found in {}",
        .path.display(),
        .directory.display()
    )]
    AmbiguousProjectRoot {
        /// The directory holding the descriptors.
        directory: PathBuf,
        /// The normalized input path.
        path: PathBuf,
        /// Every descriptor found, sorted by path.
        descriptors: Vec<PathBuf>,
    },

    /// A relative input could not be made absolute.
    #[error("failed to read current dir: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl LocateError {
    /// True when walking a different input path might still succeed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors raised while building a [`crate::BinaryLayout`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A name list has no entries.
    #[error("binary layout has no {0}")]
    Empty(&'static str),

    /// A name is empty or would escape its directory.
    #[error("invalid {kind} name '{name}'")]
    InvalidName {
        /// Which list the name came from.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },
}
