//! Error types for rnta-core

use std::path::PathBuf;

/// Result type for rnta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving project configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sentinel file marking the project root was not found
    #[error("Failed to find `{sentinel}` (searched from {start} upwards)")]
    ProjectRootNotFound {
        sentinel: &'static str,
        start: PathBuf,
    },

    /// A package could not be resolved through `node_modules`
    #[error("Cannot find package '{package}' from {from}")]
    PackageNotFound { package: String, from: PathBuf },

    /// A package manifest has no usable `version` field
    #[error("Invalid version number: {package}@{version}")]
    InvalidPackageVersion { package: String, version: String },

    /// `package.json` parsed, but is not a JSON object
    #[error("Package manifest at {path} is not a JSON object")]
    InvalidPackageManifest { path: PathBuf },

    /// A signing config in `app.json` lacks `storeFile`
    #[error("storeFile for {config} is missing")]
    MissingStoreFile { config: String },

    /// A signing config points at a keystore that does not exist
    #[error("storeFile for {config} does not exist: {path}")]
    StoreFileNotFound { config: String, path: PathBuf },

    /// Filesystem error from rnta-fs
    #[error(transparent)]
    Fs(#[from] rnta_fs::Error),

    /// JSON shape error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error only says that a file or package is absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PackageNotFound { .. } => true,
            Self::Fs(e) => e.is_not_found(),
            _ => false,
        }
    }
}
