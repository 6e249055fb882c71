//! Android package name and manifest path derivation.

use crate::app_manifest::{APP_MANIFEST, AppManifest};
use crate::error::Result;
use crate::packages::{CLI_PLATFORM_ANDROID, PackageVersions};
use crate::rules::{VersionRange, VersionRule, first_match};
use crate::version::Version;
use rnta_fs::{FileSystem, NormalizedPath, find_nearest};
use serde::Deserialize;

/// Location of the generated Android manifest inside the tool's package.
pub const GENERATED_MANIFEST: &str = "android/app/src/main/AndroidManifest.xml";

/// Android section of a configuration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidProjectConfig {
    pub source_dir: String,
    #[serde(default)]
    pub package_name: Option<String>,
}

/// Where the package name comes from for a given Android plugin version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageNameSource {
    /// The plugin cannot consume a derived package name.
    Skip,
    /// Read `android.package` from `app.json`.
    AppManifest,
}

/// Android plugin releases that mishandle a derived package name.
pub const PACKAGE_NAME_RULES: [VersionRule<PackageNameSource>; 3] = [
    // Plugin releases paired with react-native 0.72
    VersionRule::new(
        VersionRange::below(Version::new(12, 3, 7)),
        PackageNameSource::Skip,
    ),
    // Plugin releases paired with react-native 0.73
    VersionRule::new(
        VersionRange::between(Version::new(13, 0, 0), Version::new(13, 6, 9)),
        PackageNameSource::Skip,
    ),
    VersionRule::new(VersionRange::ANY, PackageNameSource::AppManifest),
];

pub fn package_name_source(plugin_version: Version) -> PackageNameSource {
    first_match(&PACKAGE_NAME_RULES, plugin_version)
        .copied()
        .unwrap_or(PackageNameSource::Skip)
}

/// Derive the package name from the nearest `app.json`.
///
/// Returns `None` when there is no app manifest, when the installed Android
/// plugin cannot be determined or is on a release that must not receive a
/// derived package name, or when the manifest has no `android.package`.
pub fn derive_package_name(
    fs: &dyn FileSystem,
    source_dir: &NormalizedPath,
    project_root: &NormalizedPath,
    versions: &mut PackageVersions,
) -> Result<Option<String>> {
    let Some(manifest_dir) = find_nearest(fs, APP_MANIFEST, source_dir) else {
        tracing::debug!(source_dir = %source_dir, "no app manifest; package name left unset");
        return Ok(None);
    };

    let plugin_version =
        match versions.react_native_plugin_version(fs, CLI_PLATFORM_ANDROID, project_root) {
            Ok(version) => version,
            Err(e) if e.is_not_found() => {
                tracing::debug!(error = %e, "Android plugin not installed");
                Version::ZERO
            }
            Err(e) => return Err(e),
        };

    if package_name_source(plugin_version) == PackageNameSource::Skip {
        tracing::debug!(
            plugin = CLI_PLATFORM_ANDROID,
            version = %plugin_version,
            "package name derivation skipped for this plugin version"
        );
        return Ok(None);
    }

    let manifest = AppManifest::load(fs, &manifest_dir.join(APP_MANIFEST))?;
    Ok(manifest.android_package().map(str::to_owned))
}

/// Path of the generated Android manifest relative to `source_dir`.
pub fn manifest_path(source_dir: &NormalizedPath, tool_dir: &NormalizedPath) -> String {
    tool_dir.join(GENERATED_MANIFEST).relative_to(source_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Version::ZERO, PackageNameSource::Skip)]
    #[case(Version::new(12, 3, 6), PackageNameSource::Skip)]
    #[case(Version::new(12, 3, 7), PackageNameSource::AppManifest)]
    #[case(Version::new(12, 9, 9), PackageNameSource::AppManifest)]
    #[case(Version::new(13, 0, 0), PackageNameSource::Skip)]
    #[case(Version::new(13, 6, 8), PackageNameSource::Skip)]
    #[case(Version::new(13, 6, 9), PackageNameSource::AppManifest)]
    #[case(Version::new(14, 0, 0), PackageNameSource::AppManifest)]
    fn package_name_gate(#[case] plugin: Version, #[case] expected: PackageNameSource) {
        assert_eq!(package_name_source(plugin), expected);
    }

    #[test]
    fn manifest_path_is_relative_to_source_dir() {
        let source_dir = NormalizedPath::new("/app/android");
        let tool_dir = NormalizedPath::new("/app/node_modules/react-native-test-app");
        assert_eq!(
            manifest_path(&source_dir, &tool_dir),
            "../node_modules/react-native-test-app/android/app/src/main/AndroidManifest.xml"
        );
    }
}
