#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Scratch directory tree, removed on drop.
pub struct Fixture {
    root: PathBuf,
}

impl Fixture {
    pub fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let root = std::env::temp_dir().join(format!(
            "unreal-locate-{prefix}-{}-{nanos}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root)
            .unwrap_or_else(|err| panic!("create fixture root {}: {err}", root.display()));
        let root = root.canonicalize().expect("canonical fixture root");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates an empty file, with parent directories.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|err| panic!("create directory {}: {err}", parent.display()));
        }
        std::fs::write(&path, b"")
            .unwrap_or_else(|err| panic!("write file {}: {err}", path.display()));
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(&path)
            .unwrap_or_else(|err| panic!("create directory {}: {err}", path.display()));
        path
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
