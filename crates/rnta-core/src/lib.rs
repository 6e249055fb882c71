//! Configuration resolution for React Native test apps.
//!
//! Given the platforms a project targets, this crate anchors the project
//! root, derives the per-platform parameters the native build tools need
//! (package name, manifest path, solution and project files) and merges
//! generated fields into the project's `package.json`.
//!
//! All filesystem access goes through [`rnta_fs::FileSystem`]:
//!
//! ```no_run
//! use rnta_core::{ConfigureOptions, ConfigureRequest, configure_projects};
//! use rnta_fs::RealFs;
//!
//! let request: ConfigureRequest = serde_json::from_str(
//!     r#"{ "android": { "sourceDir": "android" } }"#,
//! )?;
//! let options = ConfigureOptions::from_env()?;
//! let configs = configure_projects(&RealFs, &request, &options)?;
//! println!("{}", serde_json::to_string_pretty(&configs)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod android;
pub mod app_manifest;
pub mod configure;
pub mod context;
pub mod error;
pub mod gradle;
pub mod logging;
pub mod package_manifest;
pub mod packages;
pub mod platform;
pub mod resolver;
pub mod rules;
pub mod version;
pub mod windows;

pub use app_manifest::{AppManifest, SigningConfig};
pub use configure::{ConfigureOptions, ConfigureRequest, configure_projects, find_project_root};
pub use context::ExecutionContext;
pub use error::{Error, Result};
pub use gradle::WrapperOutcome;
pub use package_manifest::{FileContent, ManifestPatch, update_package_manifest};
pub use packages::PackageVersions;
pub use platform::{
    AndroidConfig, IosConfig, Platform, PlatformConfig, PlatformConfigs, ProjectFile,
    WindowsConfig, WindowsProject,
};
pub use resolver::PlatformResolver;
pub use version::Version;
