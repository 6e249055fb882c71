//! The configuration entry point.

use crate::android::AndroidProjectConfig;
use crate::context::ExecutionContext;
use crate::error::{Error, Result};
use crate::packages::resolve_package_manifest;
use crate::platform::{IosConfig, Platform, PlatformConfig, PlatformConfigs};
use crate::resolver::PlatformResolver;
use crate::windows::WindowsProjectConfig;
use rnta_fs::{FileSystem, NormalizedPath, RealFs, find_nearest};
use serde::Deserialize;

/// The file whose directory is the project root.
pub const PROJECT_ROOT_SENTINEL: &str = "react-native.config.js";

/// The test app package, whose installation holds the generated native projects.
pub const TOOL_PACKAGE: &str = "react-native-test-app";

/// Which platforms to configure, with the caller's input for each.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureRequest {
    #[serde(default)]
    pub android: Option<AndroidProjectConfig>,
    #[serde(default)]
    pub ios: Option<IosConfig>,
    #[serde(default)]
    pub windows: Option<WindowsProjectConfig>,
}

impl ConfigureRequest {
    /// The platforms present in the request.
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|platform| match platform {
                Platform::Android => self.android.is_some(),
                Platform::Ios => self.ios.is_some(),
                Platform::Windows => self.windows.is_some(),
            })
            .collect()
    }
}

/// Where and how a configuration run happens.
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// Directory the project root search starts from.
    pub start_dir: NormalizedPath,
    /// Installation directory of the test app package; located through
    /// `node_modules` when unset.
    pub tool_dir: Option<NormalizedPath>,
    pub context: ExecutionContext,
}

impl ConfigureOptions {
    pub fn new(start_dir: impl Into<NormalizedPath>) -> Self {
        Self {
            start_dir: start_dir.into(),
            tool_dir: None,
            context: ExecutionContext::default(),
        }
    }

    /// Options for the current process: its working directory, arguments
    /// and environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RealFs::current_dir()?).with_context(ExecutionContext::from_env()))
    }

    pub fn with_tool_dir(mut self, tool_dir: impl Into<NormalizedPath>) -> Self {
        self.tool_dir = Some(tool_dir.into());
        self
    }

    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }
}

/// Locate the project root by its sentinel file.
pub fn find_project_root(fs: &dyn FileSystem, start_dir: &NormalizedPath) -> Result<NormalizedPath> {
    find_nearest(fs, PROJECT_ROOT_SENTINEL, start_dir).ok_or_else(|| Error::ProjectRootNotFound {
        sentinel: PROJECT_ROOT_SENTINEL,
        start: start_dir.to_native(),
    })
}

/// Installation directory of the test app package as seen from `project_root`.
pub fn default_tool_dir(fs: &dyn FileSystem, project_root: &NormalizedPath) -> NormalizedPath {
    resolve_package_manifest(fs, TOOL_PACKAGE, project_root)
        .ok()
        .and_then(|manifest| manifest.parent())
        .unwrap_or_else(|| project_root.join("node_modules").join(TOOL_PACKAGE))
}

/// Resolve the configuration of every platform in `request`.
///
/// Fails only if the project root cannot be found or an input file is
/// malformed. Platforms missing from the request, and Windows when its
/// solution file does not exist, are absent from the result.
pub fn configure_projects(
    fs: &dyn FileSystem,
    request: &ConfigureRequest,
    options: &ConfigureOptions,
) -> Result<PlatformConfigs> {
    let project_root = find_project_root(fs, &options.start_dir)?;
    let tool_dir = options
        .tool_dir
        .clone()
        .unwrap_or_else(|| default_tool_dir(fs, &project_root));
    tracing::debug!(
        project_root = %project_root,
        tool_dir = %tool_dir,
        platforms = ?request.platforms(),
        "configuring projects"
    );

    let mut resolver = PlatformResolver::new(fs, project_root, tool_dir, options.context.clone());
    let mut configs = PlatformConfigs::new();

    if let Some(android) = &request.android {
        configs.insert(PlatformConfig::Android(resolver.resolve_android(android)?));
    }

    if let Some(ios) = &request.ios {
        configs.insert(PlatformConfig::Ios(resolver.resolve_ios(ios)));
    }

    if let Some(windows) = &request.windows
        && let Some(config) = resolver.resolve_windows(windows)?
    {
        configs.insert(PlatformConfig::Windows(config));
    }

    Ok(configs)
}
