//! Merging generated fields into `package.json`.
//!
//! Fields the patch does not target keep their value and position; new
//! top-level fields are appended in the order `scripts`, `dependencies`,
//! `devDependencies`. Merging is by key, so applying the same patch again
//! changes nothing.

use crate::error::{Error, Result};
use rnta_fs::{ConfigStore, FileSystem, NormalizedPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Development dependencies every test app project needs, as pinned by the
/// test app's own example project.
pub const DEFAULT_DEV_DEPENDENCIES: [(&str, &str); 2] = [
    ("@rnx-kit/metro-config", "^2.0.0"),
    ("react-native-test-app", "^0.0.1-dev"),
];

/// Changes to apply to a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestPatch {
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    /// Files to write, relative to the manifest's directory.
    #[serde(default)]
    pub files: BTreeMap<String, FileContent>,
    /// Files to delete, relative to the manifest's directory.
    #[serde(default)]
    pub old_files: Vec<String>,
}

/// Content of a generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FileContent {
    Text(String),
    Lines(Vec<String>),
}

impl FileContent {
    /// The text to write. Lines are joined with `\n` and end with one.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) if lines.is_empty() => String::new(),
            Self::Lines(lines) => {
                let mut text = lines.join("\n");
                text.push('\n');
                text
            }
        }
    }
}

/// Merge `patch` into the manifest's fields in place.
///
/// `scripts` and `dependencies` from the patch override existing entries
/// with the same name; default dev dependencies are only added when the
/// project does not already declare them. Merged sections are sorted by key.
pub fn merge_package_manifest(fields: &mut Map<String, Value>, patch: &ManifestPatch) {
    merge_section(fields, "scripts", &patch.scripts, true);
    merge_section(fields, "dependencies", &patch.dependencies, true);

    let dev_dependencies: BTreeMap<String, String> = DEFAULT_DEV_DEPENDENCIES
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect();
    merge_section(fields, "devDependencies", &dev_dependencies, false);
}

fn merge_section(
    fields: &mut Map<String, Value>,
    key: &str,
    entries: &BTreeMap<String, String>,
    overwrite: bool,
) {
    let mut merged: BTreeMap<String, Value> = match fields.get(key) {
        Some(Value::Object(existing)) => existing.clone().into_iter().collect(),
        _ => BTreeMap::new(),
    };
    for (name, value) in entries {
        if overwrite || !merged.contains_key(name) {
            merged.insert(name.clone(), Value::String(value.clone()));
        }
    }
    // Replacing an existing key keeps its position in the manifest.
    fields.insert(key.to_string(), Value::Object(merged.into_iter().collect()));
}

/// Apply `patch` to the `package.json` at `manifest_path`.
///
/// The merged manifest is written back, then `files` are written and
/// `old_files` deleted relative to the manifest's directory. Returns the
/// merged manifest.
pub fn update_package_manifest(
    fs: &dyn FileSystem,
    manifest_path: &NormalizedPath,
    patch: &ManifestPatch,
) -> Result<Value> {
    let store = ConfigStore::new(fs);
    let mut manifest: Value = store.load(manifest_path)?;
    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| Error::InvalidPackageManifest {
            path: manifest_path.to_native(),
        })?;

    merge_package_manifest(fields, patch);
    store.save(manifest_path, &manifest)?;

    let project_dir = manifest_path
        .parent()
        .unwrap_or_else(|| NormalizedPath::new("."));
    write_files(fs, &project_dir, patch)?;

    Ok(manifest)
}

fn write_files(fs: &dyn FileSystem, project_dir: &NormalizedPath, patch: &ManifestPatch) -> Result<()> {
    for (relative, content) in &patch.files {
        let path = project_dir.resolve(relative);
        tracing::debug!(path = %path, "writing file");
        fs.write_text(&path, &content.render())?;
    }

    for relative in &patch.old_files {
        let path = project_dir.resolve(relative);
        if fs.is_file(&path) {
            tracing::debug!(path = %path, "removing file");
            fs.remove_file(&path)?;
        }
    }

    Ok(())
}
