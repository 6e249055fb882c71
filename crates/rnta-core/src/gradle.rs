//! Gradle wrapper normalization.
//!
//! Each react-native release needs a minimum Gradle version. Before an
//! Android build, the pinned wrapper distribution is bumped to that floor if
//! it is older. This step is best-effort: failures are logged and never
//! abort configuration.

use crate::context::ExecutionContext;
use crate::error::Result;
use crate::packages::{REACT_NATIVE, package_version};
use crate::rules::{VersionRange, VersionRule, first_match};
use crate::version::Version;
use regex::{NoExpand, Regex};
use rnta_fs::{FileSystem, NormalizedPath};
use std::sync::LazyLock;

/// Wrapper properties file, relative to the Android source directory.
pub const WRAPPER_PROPERTIES: &str = "gradle/wrapper/gradle-wrapper.properties";

/// Matches the distribution archive name, e.g. `gradle-8.6-bin.zip`.
static DISTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"gradle-([.0-9]*?)-.*?\.zip").expect("Invalid Gradle distribution regex")
});

/// Gradle versions acceptable for a react-native release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperRequirement {
    /// Any version at or above the floor.
    AtLeast(&'static str),
    /// Versions in `[min, max)`; anything else is reset to `fallback`.
    Within {
        min: &'static str,
        max: &'static str,
        fallback: &'static str,
    },
}

impl WrapperRequirement {
    /// The version to pin instead of `current`, if `current` is not
    /// acceptable.
    pub fn replacement_for(&self, current: Version) -> Option<&'static str> {
        let current = current.encode();
        match *self {
            Self::AtLeast(floor) => (current < Version::parse(floor).encode()).then_some(floor),
            Self::Within { min, max, fallback } => {
                let outside = current < Version::parse(min).encode()
                    || current >= Version::parse(max).encode();
                outside.then_some(fallback)
            }
        }
    }
}

/// Gradle requirements by react-native version.
pub const WRAPPER_RULES: [VersionRule<WrapperRequirement>; 5] = [
    VersionRule::new(VersionRange::UNKNOWN, WrapperRequirement::AtLeast("8.6")),
    VersionRule::new(
        VersionRange::at_least(Version::new(0, 74, 0)),
        WrapperRequirement::AtLeast("8.6"),
    ),
    VersionRule::new(
        VersionRange::between(Version::new(0, 73, 0), Version::new(0, 74, 0)),
        WrapperRequirement::AtLeast("8.3"),
    ),
    VersionRule::new(
        VersionRange::between(Version::new(0, 72, 0), Version::new(0, 73, 0)),
        WrapperRequirement::AtLeast("8.1.1"),
    ),
    VersionRule::new(
        VersionRange::ANY,
        WrapperRequirement::Within {
            min: "7.5.1",
            max: "8.0.0",
            fallback: "7.6.4",
        },
    ),
];

/// The Gradle version to pin for `framework`, or `None` if `current` is fine.
pub fn required_wrapper_version(framework: Version, current: Version) -> Option<&'static str> {
    first_match(&WRAPPER_RULES, framework).and_then(|rule| rule.replacement_for(current))
}

/// What [`configure_gradle_wrapper`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperOutcome {
    /// Not an Android build, or disabled through the environment.
    Skipped,
    /// No wrapper properties file under the source directory.
    Missing,
    /// The pinned version is acceptable, or none could be recognized.
    Unchanged,
    /// The properties file now pins `version`.
    Updated { version: String },
    /// Something went wrong; a warning was logged.
    Failed,
}

/// Bump the Gradle wrapper under `source_dir` if it is too old for the
/// installed react-native.
pub fn configure_gradle_wrapper(
    fs: &dyn FileSystem,
    source_dir: &NormalizedPath,
    context: &ExecutionContext,
) -> WrapperOutcome {
    if !context.should_configure_gradle_wrapper() {
        return WrapperOutcome::Skipped;
    }

    let properties = source_dir.join(WRAPPER_PROPERTIES);
    if !fs.exists(&properties) {
        return WrapperOutcome::Missing;
    }

    match normalize_wrapper(fs, &properties, source_dir) {
        Ok(Some(version)) => WrapperOutcome::Updated { version },
        Ok(None) => WrapperOutcome::Unchanged,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to determine Gradle version");
            WrapperOutcome::Failed
        }
    }
}

fn normalize_wrapper(
    fs: &dyn FileSystem,
    properties: &NormalizedPath,
    source_dir: &NormalizedPath,
) -> Result<Option<String>> {
    let content = fs.read_text(properties)?;
    let Some(captures) = DISTRIBUTION.captures(&content) else {
        return Ok(None);
    };
    let current = Version::parse(&captures[1]);
    let framework = Version::parse(&package_version(fs, REACT_NATIVE, source_dir)?);

    let Some(target) = required_wrapper_version(framework, current) else {
        return Ok(None);
    };

    tracing::info!("Setting Gradle version {target}");
    let replacement = format!("gradle-{target}-bin.zip");
    let updated = DISTRIBUTION.replace(&content, NoExpand(&replacement));
    fs.write_text(properties, &updated)?;
    Ok(Some(target.to_string()))
}
