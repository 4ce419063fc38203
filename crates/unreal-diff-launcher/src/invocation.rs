//! Editor command lines for diff and merge mode.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};
use unreal_locate::Resolution;

use crate::error::LaunchError;

/// Flag that puts the editor into asset comparison mode.
pub const DIFF_FLAG: &str = "-diff";

/// Files handed to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Two-way comparison.
    #[allow(missing_docs)]
    Diff { left: PathBuf, right: PathBuf },
    /// Three-way merge writing into `result`.
    #[allow(missing_docs)]
    Merge {
        remote: PathBuf,
        local: PathBuf,
        base: PathBuf,
        result: PathBuf,
    },
}

impl EditorMode {
    fn files(&self) -> Vec<&Path> {
        match self {
            Self::Diff { left, right } => vec![left.as_path(), right.as_path()],
            Self::Merge {
                remote,
                local,
                base,
                result,
            } => vec![
                remote.as_path(),
                local.as_path(),
                base.as_path(),
                result.as_path(),
            ],
        }
    }
}

/// A fully resolved editor command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInvocation {
    /// The editor executable.
    pub program: PathBuf,
    /// Everything after the program name.
    pub args: Vec<OsString>,
}

impl EditorInvocation {
    /// `<editor> [<project>] -diff <files...>`
    ///
    /// Merge mode passes `-diff` too, followed by four files.
    #[must_use]
    pub fn new(resolution: &Resolution, mode: &EditorMode) -> Self {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(project) = &resolution.project {
            args.push(project.clone().into_os_string());
        }
        args.push(DIFF_FLAG.into());
        args.extend(mode.files().into_iter().map(|p| p.as_os_str().to_os_string()));
        Self {
            program: resolution.editor.clone(),
            args,
        }
    }

    /// A `Command` ready to spawn; stdio is inherited.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Runs the editor to completion and returns its exit code.
    ///
    /// An editor killed without an exit code (by a signal) reports `1`.
    pub fn run(&self) -> Result<i32, LaunchError> {
        info!(command = %self.display(), "launching unreal editor");
        let status = self
            .to_command()
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        match status.code() {
            Some(code) => Ok(code),
            None => {
                warn!("unreal editor terminated without an exit code ({status})");
                Ok(1)
            }
        }
    }

    /// Human-readable command line, quoting arguments that contain spaces.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(arg: &OsStr) -> String {
    let text = arg.to_string_lossy();
    if text.is_empty() || text.contains(char::is_whitespace) || text.contains('"') {
        format!("\"{}\"", text.replace('"', "\\\""))
    } else {
        text.into_owned()
    }
}
