//! Editor binary naming table.

use smol_str::SmolStr;

use crate::error::LayoutError;

/// Directory under an Engine or project root that holds per-platform binaries.
pub const BINARIES_DIR_NAME: &str = "Binaries";

/// A platform the editor can be built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    name: SmolStr,
    executable_extension: SmolStr,
}

impl Platform {
    /// Creates a platform entry. A leading `.` on the extension is dropped.
    pub fn new(
        name: impl Into<SmolStr>,
        executable_extension: impl AsRef<str>,
    ) -> Result<Self, LayoutError> {
        let name = checked_name("platform", name.into())?;
        let extension = executable_extension.as_ref().trim();
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        if extension.contains(['/', '\\', '.']) {
            return Err(LayoutError::InvalidName {
                kind: "executable extension",
                name: extension.to_string(),
            });
        }
        Ok(Self {
            name,
            executable_extension: extension.into(),
        })
    }

    /// The `Win64` platform, with `.exe` binaries.
    #[must_use]
    pub fn win64() -> Self {
        Self {
            name: SmolStr::new_static("Win64"),
            executable_extension: SmolStr::new_static("exe"),
        }
    }

    /// Directory and file-name component, e.g. `Win64`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension without the dot; empty when binaries carry none.
    #[must_use]
    pub fn executable_extension(&self) -> &str {
        &self.executable_extension
    }
}

/// One candidate file name produced by a [`BinaryLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBinary<'a> {
    /// Platform whose `Binaries/<platform>` directory holds the file.
    pub platform: &'a Platform,
    /// Bare file name, no directory.
    pub file_name: String,
}

/// The target x platform x configuration table the locator enumerates.
///
/// Enumeration order is targets outermost, then platforms, then
/// configurations, each in insertion order. That order decides which binary
/// counts as "first" when several exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryLayout {
    targets: Vec<SmolStr>,
    platforms: Vec<Platform>,
    configurations: Vec<SmolStr>,
}

impl Default for BinaryLayout {
    fn default() -> Self {
        Self {
            targets: vec![SmolStr::new_static("UnrealEditor")],
            platforms: vec![Platform::win64()],
            configurations: vec![
                SmolStr::new_static("Development"),
                SmolStr::new_static("DebugGame"),
            ],
        }
    }
}

impl BinaryLayout {
    /// Builds a validated layout. Duplicate entries keep their first position.
    pub fn new<T, C>(
        targets: impl IntoIterator<Item = T>,
        platforms: impl IntoIterator<Item = Platform>,
        configurations: impl IntoIterator<Item = C>,
    ) -> Result<Self, LayoutError>
    where
        T: Into<SmolStr>,
        C: Into<SmolStr>,
    {
        let targets = checked_names("target", "targets", targets)?;
        let configurations = checked_names("configuration", "configurations", configurations)?;
        let mut unique_platforms: Vec<Platform> = Vec::new();
        for platform in platforms {
            if !unique_platforms.iter().any(|p| p.name == platform.name) {
                unique_platforms.push(platform);
            }
        }
        if unique_platforms.is_empty() {
            return Err(LayoutError::Empty("platforms"));
        }
        Ok(Self {
            targets,
            platforms: unique_platforms,
            configurations,
        })
    }

    /// Build targets, e.g. `UnrealEditor`.
    #[must_use]
    pub fn targets(&self) -> &[SmolStr] {
        &self.targets
    }

    /// Platforms in enumeration order.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Build configurations, e.g. `Development`.
    #[must_use]
    pub fn configurations(&self) -> &[SmolStr] {
        &self.configurations
    }

    /// Every candidate file name, in enumeration order.
    pub fn candidates(&self) -> impl Iterator<Item = CandidateBinary<'_>> + '_ {
        self.targets.iter().flat_map(move |target| {
            self.platforms.iter().flat_map(move |platform| {
                self.configurations
                    .iter()
                    .map(move |configuration| CandidateBinary {
                        platform,
                        file_name: binary_file_name(target, platform, configuration),
                    })
            })
        })
    }
}

/// `<target>-<platform>-<configuration>[.<extension>]`
#[must_use]
pub fn binary_file_name(target: &str, platform: &Platform, configuration: &str) -> String {
    let stem = format!("{target}-{}-{configuration}", platform.name);
    if platform.executable_extension.is_empty() {
        stem
    } else {
        format!("{stem}.{}", platform.executable_extension)
    }
}

fn checked_name(kind: &'static str, name: SmolStr) -> Result<SmolStr, LayoutError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." || trimmed.contains(['/', '\\']) {
        return Err(LayoutError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.into())
    }
}

fn checked_names<T: Into<SmolStr>>(
    kind: &'static str,
    plural: &'static str,
    names: impl IntoIterator<Item = T>,
) -> Result<Vec<SmolStr>, LayoutError> {
    let mut out: Vec<SmolStr> = Vec::new();
    for name in names {
        let name = checked_name(kind, name.into())?;
        if !out.contains(&name) {
            out.push(name);
        }
    }
    if out.is_empty() {
        return Err(LayoutError::Empty(plural));
    }
    Ok(out)
}
