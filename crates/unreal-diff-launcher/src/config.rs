//! Launcher configuration loading.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use serde::Deserialize;
use smol_str::SmolStr;
use unreal_locate::{BinaryLayout, Platform};

use crate::error::LaunchError;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "UNREAL_DIFF_LAUNCHER_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(text: &str) -> Result<Self, LaunchError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(LaunchError::InvalidConfig(
                format!("invalid log.level '{text}'").into(),
            )),
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Where the config came from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
    pub log_level: LogLevel,
    pub layout: BinaryLayout,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            source: None,
            log_level: LogLevel::Warn,
            layout: BinaryLayout::default(),
        }
    }
}

impl LauncherConfig {
    /// Loads the config named by `explicit`, else by [`CONFIG_ENV_VAR`], else
    /// returns the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, LaunchError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::from_file(Path::new(&value)),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LaunchError> {
        let text = std::fs::read_to_string(path).map_err(|source| LaunchError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, LaunchError> {
        let raw: LauncherToml = toml::from_str(text)
            .map_err(|err| LaunchError::InvalidConfig(err.to_string().into()))?;
        raw.into_config()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LauncherToml {
    #[serde(default)]
    log: LogSection,
    #[serde(default)]
    binaries: BinariesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BinariesSection {
    targets: Option<Vec<String>>,
    platforms: Option<Vec<PlatformSection>>,
    configurations: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlatformSection {
    name: String,
    #[serde(default)]
    executable_extension: String,
}

impl LauncherToml {
    fn into_config(self) -> Result<LauncherConfig, LaunchError> {
        let log_level = match self.log.level.as_deref() {
            Some(level) => LogLevel::parse(level)?,
            None => LogLevel::Warn,
        };
        let defaults = BinaryLayout::default();
        let targets: Vec<SmolStr> = match self.binaries.targets {
            Some(targets) => targets.into_iter().map(SmolStr::new).collect(),
            None => defaults.targets().to_vec(),
        };
        let platforms = match self.binaries.platforms {
            Some(platforms) => platforms
                .into_iter()
                .map(|platform| Platform::new(platform.name, platform.executable_extension))
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.platforms().to_vec(),
        };
        let configurations: Vec<SmolStr> = match self.binaries.configurations {
            Some(configurations) => configurations.into_iter().map(SmolStr::new).collect(),
            None => defaults.configurations().to_vec(),
        };
        let layout = BinaryLayout::new(targets, platforms, configurations)?;
        Ok(LauncherConfig {
            source: None,
            log_level,
            layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = LauncherConfig::from_toml_str("").expect("empty config");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.layout, BinaryLayout::default());
    }

    #[test]
    fn partial_binaries_section_keeps_other_defaults() {
        let config = LauncherConfig::from_toml_str(
            r#"
[binaries]
configurations = ["DebugGame", "Development"]
"#,
        )
        .expect("config");
        let names: Vec<String> = config.layout.candidates().map(|c| c.file_name).collect();
        assert_eq!(
            names,
            vec![
                "UnrealEditor-Win64-DebugGame.exe",
                "UnrealEditor-Win64-Development.exe",
            ]
        );
    }

    #[test]
    fn platforms_and_log_level_are_read() {
        let config = LauncherConfig::from_toml_str(
            r#"
[log]
level = "DEBUG"

[[binaries.platforms]]
name = "Linux"

[[binaries.platforms]]
name = "Win64"
executable_extension = ".exe"
"#,
        )
        .expect("config");
        assert_eq!(config.log_level, LogLevel::Debug);
        let platforms: Vec<(&str, &str)> = config
            .layout
            .platforms()
            .iter()
            .map(|p| (p.name(), p.executable_extension()))
            .collect();
        assert_eq!(platforms, vec![("Linux", ""), ("Win64", "exe")]);
    }

    #[test]
    fn rejects_bad_values() {
        let err = LauncherConfig::from_toml_str("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid config: invalid log.level 'loud'");

        let err = LauncherConfig::from_toml_str("[binaries]\ntargets = []\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid config: binary layout has no targets");

        let err = LauncherConfig::from_toml_str("[binaries]\nplatform = \"Win64\"\n").unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfig(_)));
    }
}
