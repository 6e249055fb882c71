//! Per-platform resolution against a located project root.

use crate::android::{self, AndroidProjectConfig};
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::gradle;
use crate::packages::PackageVersions;
use crate::platform::{AndroidConfig, IosConfig, WindowsConfig};
use crate::windows::{self, WindowsProjectConfig};
use rnta_fs::{FileSystem, NormalizedPath};

/// Turns the caller's per-platform input into finished platform configs.
///
/// The resolver owns the version cache for one configuration run, so every
/// package version is read from disk at most once per resolver.
pub struct PlatformResolver<'a> {
    fs: &'a dyn FileSystem,
    project_root: NormalizedPath,
    tool_dir: NormalizedPath,
    context: ExecutionContext,
    versions: PackageVersions,
}

impl<'a> PlatformResolver<'a> {
    /// # Arguments
    ///
    /// * `project_root` - Directory that relative request paths are resolved against
    /// * `tool_dir` - Installation directory of the test app package
    /// * `context` - Arguments and environment of the invoking process
    pub fn new(
        fs: &'a dyn FileSystem,
        project_root: NormalizedPath,
        tool_dir: NormalizedPath,
        context: ExecutionContext,
    ) -> Self {
        Self {
            fs,
            project_root,
            tool_dir,
            context,
            versions: PackageVersions::new(),
        }
    }

    pub fn versions(&self) -> &PackageVersions {
        &self.versions
    }

    /// The version cache, e.g. to pin versions that are not installed.
    pub fn versions_mut(&mut self) -> &mut PackageVersions {
        &mut self.versions
    }

    /// Resolve the Android config.
    ///
    /// A non-empty `packageName` from the caller always wins; otherwise it
    /// is derived from `app.json` when the installed plugin allows it. The
    /// Gradle wrapper is normalized as a side effect when the invoking
    /// command is an Android build.
    pub fn resolve_android(&mut self, input: &AndroidProjectConfig) -> Result<AndroidConfig> {
        let source_dir = self.project_root.resolve(&input.source_dir);
        let package_name = match input.package_name.as_deref().filter(|name| !name.is_empty()) {
            Some(explicit) => Some(explicit.to_string()),
            None => android::derive_package_name(
                self.fs,
                &source_dir,
                &self.project_root,
                &mut self.versions,
            )?,
        };

        let config = AndroidConfig {
            source_dir: input.source_dir.clone(),
            manifest_path: android::manifest_path(&source_dir, &self.tool_dir),
            package_name,
        };

        let outcome = gradle::configure_gradle_wrapper(self.fs, &source_dir, &self.context);
        tracing::debug!(?outcome, "gradle wrapper");

        Ok(config)
    }

    pub fn resolve_ios(&self, input: &IosConfig) -> IosConfig {
        input.clone()
    }

    /// Resolve the Windows config; `None` when the solution file is absent.
    pub fn resolve_windows(&self, input: &WindowsProjectConfig) -> Result<Option<WindowsConfig>> {
        windows::resolve(self.fs, input, &self.project_root)
    }
}
