//! Ancestor walk that infers the editor binary and project for an asset path.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::LocateError;
use crate::layout::BinaryLayout;
use crate::locator::BinaryLocator;
use crate::paths::normalize_start_path;

/// Name of an Engine installation root.
pub const ENGINE_DIR_NAME: &str = "Engine";
/// Extension of project descriptor files.
pub const PROJECT_EXTENSION: &str = "uproject";

/// The editor to launch and the project to open it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Absolute path of an existing editor executable.
    pub editor: PathBuf,
    /// The project descriptor, or `None` for a bare Engine root.
    pub project: Option<PathBuf>,
}

/// Picks one binary when a root holds several.
pub trait BinarySelector {
    /// Returns the chosen binary; `candidates` is in layout order.
    fn select(&self, candidates: &mut dyn Iterator<Item = PathBuf>) -> Option<PathBuf>;
}

/// Takes the first binary in layout order. No version or recency comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl BinarySelector for FirstMatch {
    fn select(&self, candidates: &mut dyn Iterator<Item = PathBuf>) -> Option<PathBuf> {
        candidates.next()
    }
}

/// Outcome of examining one ancestor directory.
enum Step {
    Found(Resolution),
    Continue,
    Fatal(LocateError),
}

/// Walks from an input path toward the filesystem root looking for an Engine
/// or project root with a usable editor binary.
#[derive(Debug, Clone)]
pub struct Resolver<S = FirstMatch> {
    layout: BinaryLayout,
    selector: S,
}

impl Default for Resolver<FirstMatch> {
    fn default() -> Self {
        Self::new(BinaryLayout::default())
    }
}

impl Resolver<FirstMatch> {
    /// Creates a resolver that picks the first binary found.
    #[must_use]
    pub fn new(layout: BinaryLayout) -> Self {
        Self {
            layout,
            selector: FirstMatch,
        }
    }
}

impl<S: BinarySelector> Resolver<S> {
    /// Creates a resolver with a custom binary selection policy.
    pub fn with_selector(layout: BinaryLayout, selector: S) -> Self {
        Self { layout, selector }
    }

    /// The naming table used for binary lookup.
    #[must_use]
    pub fn layout(&self) -> &BinaryLayout {
        &self.layout
    }

    /// Resolves the editor (and project, if any) for `start_path`.
    ///
    /// Ancestors are visited innermost first, never including `start_path`
    /// itself. The walk stops at the first usable root, or at the first
    /// directory holding more than one project descriptor.
    pub fn resolve(&self, start_path: &Path) -> Result<Resolution, LocateError> {
        let start = normalize_start_path(start_path)?;
        debug!(path = %start.display(), "inferring unreal editor");
        for dir in start.ancestors().skip(1) {
            match self.examine(dir, &start) {
                Step::Found(resolution) => {
                    debug!(
                        editor = %resolution.editor.display(),
                        project = ?resolution.project,
                        "resolved unreal editor"
                    );
                    return Ok(resolution);
                }
                Step::Continue => {}
                Step::Fatal(err) => return Err(err),
            }
        }
        Err(LocateError::NotFound { path: start })
    }

    fn examine(&self, dir: &Path, start: &Path) -> Step {
        if dir.file_name() == Some(OsStr::new(ENGINE_DIR_NAME)) {
            trace!(dir = %dir.display(), "candidate engine root");
            return match self.first_binary(dir) {
                Some(editor) => Step::Found(Resolution {
                    editor,
                    project: None,
                }),
                None => Step::Continue,
            };
        }

        let mut descriptors = project_descriptors(dir);
        match descriptors.len() {
            0 => Step::Continue,
            1 => {
                let project = descriptors.remove(0);
                trace!(project = %project.display(), "candidate project root");
                match self.project_binary(dir) {
                    Some(editor) => Step::Found(Resolution {
                        editor,
                        project: Some(project),
                    }),
                    None => {
                        debug!(
                            project = %project.display(),
                            "project has no editor binaries, continuing upward"
                        );
                        Step::Continue
                    }
                }
            }
            _ => {
                descriptors.sort();
                Step::Fatal(LocateError::AmbiguousProjectRoot {
                    directory: dir.to_path_buf(),
                    path: start.to_path_buf(),
                    descriptors,
                })
            }
        }
    }

    /// Binaries built into the project itself win over a sibling Engine.
    fn project_binary(&self, project_root: &Path) -> Option<PathBuf> {
        if let Some(editor) = self.first_binary(project_root) {
            return Some(editor);
        }
        let engine_dir = project_root.parent()?.join(ENGINE_DIR_NAME);
        if !engine_dir.is_dir() {
            return None;
        }
        self.first_binary(&engine_dir)
    }

    fn first_binary(&self, root: &Path) -> Option<PathBuf> {
        let mut found = BinaryLocator::new(&self.layout).locate(root);
        self.selector.select(&mut found)
    }
}

/// Regular files directly inside `dir` whose name ends in `.uproject`.
fn project_descriptors(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), "skipping unreadable directory: {err}");
            return Vec::new();
        }
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| is_descriptor_name(&entry.file_name()))
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect()
}

/// `*.uproject`, including a bare `.uproject`. Case is ignored on Windows.
fn is_descriptor_name(file_name: &OsStr) -> bool {
    let name = file_name.as_encoded_bytes();
    let extension = PROJECT_EXTENSION.as_bytes();
    let Some(dot) = name.len().checked_sub(extension.len() + 1) else {
        return false;
    };
    if name[dot] != b'.' {
        return false;
    }
    let suffix = &name[dot + 1..];
    if cfg!(windows) {
        suffix.eq_ignore_ascii_case(extension)
    } else {
        suffix == extension
    }
}
