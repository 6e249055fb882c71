//! Read-only view of the app manifest (`app.json`).

use crate::error::{Error, Result};
use rnta_fs::{ConfigStore, FileSystem, NormalizedPath};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Conventional file name of the app manifest.
pub const APP_MANIFEST: &str = "app.json";

/// Application id used when the manifest does not set `android.package`.
pub const DEFAULT_APPLICATION_ID: &str = "com.microsoft.reacttestapp";

/// App name used when the manifest sets neither `displayName` nor `name`.
pub const DEFAULT_APP_NAME: &str = "ReactTestApp";

const DEFAULT_KEY_ALIAS: &str = "androiddebugkey";
const DEFAULT_PASSWORD: &str = "android";

/// The parsed `app.json`.
///
/// Fields are read leniently: a field of the wrong type behaves as if it
/// were absent.
#[derive(Debug, Clone, PartialEq)]
pub struct AppManifest {
    path: NormalizedPath,
    value: Value,
}

/// A signing config as written in `android.signingConfigs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SigningConfigEntry {
    key_alias: Option<String>,
    key_password: Option<String>,
    store_file: Option<String>,
    store_password: Option<String>,
}

/// A validated signing config with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    pub key_alias: String,
    pub key_password: String,
    pub store_file: NormalizedPath,
    pub store_password: String,
}

impl AppManifest {
    /// Load the manifest at `path`. Malformed JSON is an error.
    pub fn load(fs: &dyn FileSystem, path: &NormalizedPath) -> Result<Self> {
        let value = ConfigStore::new(fs).load(path)?;
        Ok(Self {
            path: path.clone(),
            value,
        })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.value.get("displayName").and_then(Value::as_str)
    }

    /// `displayName`, falling back to `name`.
    pub fn app_name(&self) -> &str {
        self.display_name()
            .or_else(|| self.name())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// `android.package`, if set.
    pub fn android_package(&self) -> Option<&str> {
        self.value.pointer("/android/package").and_then(Value::as_str)
    }

    pub fn application_id(&self) -> &str {
        self.android_package().unwrap_or(DEFAULT_APPLICATION_ID)
    }

    /// Bundled resources, either a flat list or per-platform lists.
    pub fn resources(&self, platform: &str) -> Vec<&str> {
        let resources = match self.value.get("resources") {
            Some(Value::Object(per_platform)) => per_platform.get(platform),
            other => other,
        };
        resources
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Validate `android.signingConfigs`.
    ///
    /// `storeFile` is resolved against the manifest's directory and must
    /// exist. Missing aliases and passwords fall back to the Android debug
    /// keystore defaults.
    pub fn signing_configs(&self, fs: &dyn FileSystem) -> Result<BTreeMap<String, SigningConfig>> {
        let Some(raw) = self.value.pointer("/android/signingConfigs") else {
            return Ok(BTreeMap::new());
        };
        let entries: BTreeMap<String, SigningConfigEntry> = serde_json::from_value(raw.clone())?;
        let manifest_dir = self
            .path
            .parent()
            .unwrap_or_else(|| NormalizedPath::new("."));

        entries
            .into_iter()
            .map(|(name, entry)| {
                let store_file = entry
                    .store_file
                    .ok_or_else(|| Error::MissingStoreFile {
                        config: name.clone(),
                    })?;
                let store_file = manifest_dir.resolve(&store_file);
                if !fs.is_file(&store_file) {
                    return Err(Error::StoreFileNotFound {
                        config: name,
                        path: store_file.to_native(),
                    });
                }

                let config = SigningConfig {
                    key_alias: entry.key_alias.unwrap_or_else(|| DEFAULT_KEY_ALIAS.into()),
                    key_password: entry.key_password.unwrap_or_else(|| DEFAULT_PASSWORD.into()),
                    store_file,
                    store_password: entry
                        .store_password
                        .unwrap_or_else(|| DEFAULT_PASSWORD.into()),
                };
                Ok((name, config))
            })
            .collect()
    }
}
