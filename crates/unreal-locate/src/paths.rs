//! Input path normalization.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::LocateError;

/// Makes `path` absolute and resolves symlinks before an ancestor walk.
///
/// Paths that do not exist yet (a merge result file, a deleted temp file) are
/// resolved through their longest existing ancestor, with the missing tail
/// re-appended as written.
pub fn normalize_start_path(path: &Path) -> Result<PathBuf, LocateError> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(simplify(canonical));
    }
    let absolute = std::path::absolute(path).map_err(LocateError::CurrentDir)?;

    let mut tail: Vec<OsString> = Vec::new();
    let mut current = absolute.as_path();
    loop {
        if let Ok(base) = current.canonicalize() {
            return Ok(simplify(append_tail(base, &tail)));
        }
        let Some(last) = current.components().next_back() else {
            break;
        };
        let Some(parent) = current.parent() else {
            break;
        };
        tail.push(last.as_os_str().to_os_string());
        current = parent;
    }
    // Nothing on the path exists, not even the filesystem root.
    Ok(append_tail(PathBuf::new(), &tail))
}

fn append_tail(mut base: PathBuf, tail: &[OsString]) -> PathBuf {
    for part in tail.iter().rev() {
        match Path::new(part).components().next() {
            Some(Component::ParentDir) => {
                base.pop();
            }
            Some(Component::CurDir) | None => {}
            Some(_) => base.push(part),
        }
    }
    base
}

#[cfg(windows)]
fn simplify(path: PathBuf) -> PathBuf {
    // `canonicalize` returns `\\?\C:\...`; the editor expects plain drive paths.
    let text = path.to_string_lossy();
    match text.strip_prefix(r"\\?\") {
        Some(rest) if rest.as_bytes().get(1) == Some(&b':') => PathBuf::from(rest),
        _ => path,
    }
}

#[cfg(not(windows))]
fn simplify(path: PathBuf) -> PathBuf {
    path
}
