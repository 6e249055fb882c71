//! Installed package lookup and the per-invocation version cache.

use crate::error::{Error, Result};
use crate::version::Version;
use rnta_fs::{ConfigStore, FileSystem, NormalizedPath, find_nearest};
use serde_json::Value;
use std::collections::HashMap;

/// The host framework package.
pub const REACT_NATIVE: &str = "react-native";

/// The Android platform plugin whose releases change how package names work.
pub const CLI_PLATFORM_ANDROID: &str = "@react-native-community/cli-platform-android";

/// Locate `node_modules/<package>/package.json` from `from_dir` or any of
/// its ancestors, the way Node resolves packages.
pub fn resolve_package_manifest(
    fs: &dyn FileSystem,
    package: &str,
    from_dir: &NormalizedPath,
) -> Result<NormalizedPath> {
    let relative = format!("node_modules/{package}/package.json");
    find_nearest(fs, &relative, from_dir)
        .map(|dir| dir.join(&relative))
        .ok_or_else(|| Error::PackageNotFound {
            package: package.to_string(),
            from: from_dir.to_native(),
        })
}

/// Read the `version` string of a package installed for `from_dir`.
pub fn package_version(
    fs: &dyn FileSystem,
    package: &str,
    from_dir: &NormalizedPath,
) -> Result<String> {
    let manifest_path = resolve_package_manifest(fs, package, from_dir)?;
    let manifest: Value = ConfigStore::new(fs).load(&manifest_path)?;
    match manifest.get("version") {
        Some(Value::String(version)) => Ok(version.clone()),
        other => Err(Error::InvalidPackageVersion {
            package: package.to_string(),
            version: other.map_or_else(|| "undefined".to_string(), Value::to_string),
        }),
    }
}

/// Resolved package versions, memoized by package name.
///
/// Owned by a single resolver for the duration of one configuration run;
/// a fresh cache re-reads everything from disk.
#[derive(Debug, Default, Clone)]
pub struct PackageVersions {
    versions: HashMap<String, Version>,
}

impl PackageVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version of `package` as installed for `from_dir`.
    pub fn version_of(
        &mut self,
        fs: &dyn FileSystem,
        package: &str,
        from_dir: &NormalizedPath,
    ) -> Result<Version> {
        if let Some(version) = self.versions.get(package) {
            tracing::trace!(%package, %version, "version cache hit");
            return Ok(*version);
        }

        let version = Version::parse(&package_version(fs, package, from_dir)?);
        tracing::debug!(%package, %version, "resolved package version");
        self.versions.insert(package.to_string(), version);
        Ok(version)
    }

    /// Version of a framework plugin, resolved from the directory of the
    /// `react-native` package installed for `project_root`.
    pub fn react_native_plugin_version(
        &mut self,
        fs: &dyn FileSystem,
        package: &str,
        project_root: &NormalizedPath,
    ) -> Result<Version> {
        if let Some(version) = self.versions.get(package) {
            return Ok(*version);
        }

        let framework_manifest = resolve_package_manifest(fs, REACT_NATIVE, project_root)?;
        let framework_dir = framework_manifest
            .parent()
            .unwrap_or_else(|| project_root.clone());
        self.version_of(fs, package, &framework_dir)
    }

    /// Pin a version without touching the disk.
    pub fn insert(&mut self, package: impl Into<String>, version: Version) {
        self.versions.insert(package.into(), version);
    }

    pub fn clear(&mut self) {
        self.versions.clear();
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
