//! Per-platform configuration records.
//!
//! The result of a configuration run is the subset of [`PlatformConfig`]
//! variants that applied, keyed by [`Platform`]. Absent platforms are simply
//! absent; there are no placeholder entries.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A platform the test app can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Android, Platform::Ios, Platform::Windows];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Android build parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    /// Android project directory, as given by the caller.
    pub source_dir: String,
    /// Path of the generated `AndroidManifest.xml`, relative to `source_dir`.
    pub manifest_path: String,
    /// Application package name; unset when neither given nor derivable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

/// iOS parameters, passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    pub source_dir: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Windows build parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsConfig {
    pub source_dir: String,
    /// Solution file, relative to `source_dir`.
    pub solution_file: String,
    pub project: WindowsProject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsProject {
    pub project_file: ProjectFile,
}

/// The app project referenced by a solution file.
///
/// Serializes as a plain string either way, so downstream generators see a
/// diagnostic in place of a path when the solution could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFile {
    /// Path of the generated `.vcxproj`, as written in the solution.
    Found(String),
    /// No generated project reference in the solution file.
    Unparsed { solution_file: String },
}

impl ProjectFile {
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Found(path) => Some(path),
            Self::Unparsed { .. } => None,
        }
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found(path) => f.write_str(path),
            Self::Unparsed { solution_file } => write!(f, "(Failed to parse '{solution_file}')"),
        }
    }
}

impl Serialize for ProjectFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Finished configuration for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlatformConfig {
    Android(AndroidConfig),
    Ios(IosConfig),
    Windows(WindowsConfig),
}

impl PlatformConfig {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Android(_) => Platform::Android,
            Self::Ios(_) => Platform::Ios,
            Self::Windows(_) => Platform::Windows,
        }
    }
}

/// The configured platforms, serialized as `{ "android": .., "ios": .., .. }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PlatformConfigs(BTreeMap<Platform, PlatformConfig>);

impl PlatformConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a config, replacing any previous one for the same platform.
    pub fn insert(&mut self, config: PlatformConfig) {
        self.0.insert(config.platform(), config);
    }

    pub fn get(&self, platform: Platform) -> Option<&PlatformConfig> {
        self.0.get(&platform)
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains_key(&platform)
    }

    pub fn android(&self) -> Option<&AndroidConfig> {
        match self.get(Platform::Android) {
            Some(PlatformConfig::Android(config)) => Some(config),
            _ => None,
        }
    }

    pub fn ios(&self) -> Option<&IosConfig> {
        match self.get(Platform::Ios) {
            Some(PlatformConfig::Ios(config)) => Some(config),
            _ => None,
        }
    }

    pub fn windows(&self) -> Option<&WindowsConfig> {
        match self.get(Platform::Windows) {
            Some(PlatformConfig::Windows(config)) => Some(config),
            _ => None,
        }
    }

    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
