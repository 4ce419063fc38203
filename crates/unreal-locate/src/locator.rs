//! Editor binary discovery under a single candidate root.

use std::path::{Path, PathBuf};

use crate::layout::{BinaryLayout, BINARIES_DIR_NAME};

/// Finds editor binaries under an Engine or project root.
#[derive(Debug, Clone, Copy)]
pub struct BinaryLocator<'a> {
    layout: &'a BinaryLayout,
}

impl<'a> BinaryLocator<'a> {
    /// Creates a locator over `layout`.
    #[must_use]
    pub fn new(layout: &'a BinaryLayout) -> Self {
        Self { layout }
    }

    /// Lazily yields `root/Binaries/<platform>/<file>` for every layout
    /// candidate that exists as a regular file, in layout order.
    ///
    /// A missing `root`, or a missing `Binaries/<platform>` below it, yields
    /// nothing for that platform; absence is not an error.
    pub fn locate(&self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        let layout: &'a BinaryLayout = self.layout;
        let binaries_dir = root.join(BINARIES_DIR_NAME);
        layout.candidates().filter_map(move |candidate| {
            let platform_dir = binaries_dir.join(candidate.platform.name());
            let path = platform_dir.join(&candidate.file_name);
            if path.is_file() {
                tracing::trace!(path = %path.display(), "editor binary present");
                Some(path)
            } else {
                None
            }
        })
    }
}

/// Shorthand for [`BinaryLocator::locate`], collected into a `Vec`.
#[must_use]
pub fn locate_binaries(layout: &BinaryLayout, root: &Path) -> Vec<PathBuf> {
    BinaryLocator::new(layout).locate(root).collect()
}
