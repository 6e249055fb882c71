use pretty_assertions::assert_eq;
use rnta_core::gradle::{WRAPPER_PROPERTIES, configure_gradle_wrapper};
use rnta_core::{ExecutionContext, WrapperOutcome};
use rnta_fs::{FileSystem, MemoryFs, NormalizedPath};
use rnta_test_utils::fixtures;
use rstest::rstest;

const ROOT: &str = "/project";

fn android_dir() -> NormalizedPath {
    NormalizedPath::new("/project/android")
}

fn properties_path() -> NormalizedPath {
    android_dir().join(WRAPPER_PROPERTIES)
}

fn run_android() -> ExecutionContext {
    ExecutionContext::new(["node", "react-native", "run-android"])
}

fn fs_with(react_native: &str, gradle: &str) -> MemoryFs {
    MemoryFs::with_files(fixtures::rooted(
        ROOT,
        [
            fixtures::installed_package("react-native", react_native),
            fixtures::gradle_wrapper("android", gradle),
        ],
    ))
}

#[rstest]
#[case("0.74.0", "8.5", "8.6")]
#[case("0.73.0", "8.2", "8.3")]
#[case("0.72.4", "8.0.1", "8.1.1")]
#[case("0.70.0", "8.0.0", "7.6.4")]
#[case("0.71.2", "7.3", "7.6.4")]
fn test_outdated_wrapper_is_rewritten(
    #[case] react_native: &str,
    #[case] gradle: &str,
    #[case] expected: &str,
) {
    let fs = fs_with(react_native, gradle);
    let before = fs.read_text(&properties_path()).unwrap();

    let outcome = configure_gradle_wrapper(&fs, &android_dir(), &run_android());

    assert_eq!(
        outcome,
        WrapperOutcome::Updated {
            version: expected.to_string()
        }
    );
    let after = fs.read_text(&properties_path()).unwrap();
    assert_eq!(
        after,
        before.replace(
            &format!("gradle-{gradle}-bin.zip"),
            &format!("gradle-{expected}-bin.zip")
        )
    );
}

#[rstest]
#[case("0.74.0", "8.6")]
#[case("0.74.0", "8.8")]
#[case("0.73.6", "8.3")]
#[case("0.70.0", "7.6.4")]
fn test_acceptable_wrapper_is_left_unchanged(#[case] react_native: &str, #[case] gradle: &str) {
    let fs = fs_with(react_native, gradle);
    let before = fs.files();

    let outcome = configure_gradle_wrapper(&fs, &android_dir(), &run_android());

    assert_eq!(outcome, WrapperOutcome::Unchanged);
    assert_eq!(fs.files(), before);
}

#[test]
fn test_disabled_by_environment_flag() {
    let fs = fs_with("0.74.0", "8.5");
    let before = fs.files();

    let outcome =
        configure_gradle_wrapper(&fs, &android_dir(), &run_android().with_gradle_wrapper(false));

    assert_eq!(outcome, WrapperOutcome::Skipped);
    assert_eq!(fs.files(), before);
}

#[test]
fn test_skipped_outside_android_commands() {
    let fs = fs_with("0.74.0", "8.5");
    let context = ExecutionContext::new(["node", "react-native", "run-ios"]);
    assert_eq!(
        configure_gradle_wrapper(&fs, &android_dir(), &context),
        WrapperOutcome::Skipped
    );
}

#[test]
fn test_missing_properties_file() {
    let fs = MemoryFs::with_files(fixtures::rooted(
        ROOT,
        [fixtures::installed_package("react-native", "0.74.0")],
    ));
    assert_eq!(
        configure_gradle_wrapper(&fs, &android_dir(), &run_android()),
        WrapperOutcome::Missing
    );
}

#[test]
fn test_unknown_framework_version_is_swallowed() {
    let fs = MemoryFs::with_files(fixtures::rooted(
        ROOT,
        [fixtures::gradle_wrapper("android", "8.5")],
    ));
    let before = fs.files();

    let outcome = configure_gradle_wrapper(&fs, &android_dir(), &run_android());

    assert_eq!(outcome, WrapperOutcome::Failed);
    assert_eq!(fs.files(), before);
}

#[test]
fn test_unrecognized_distribution_is_left_alone() {
    let fs = MemoryFs::with_files(fixtures::rooted(
        ROOT,
        [
            fixtures::installed_package("react-native", "0.74.0"),
            (
                "android/gradle/wrapper/gradle-wrapper.properties".to_string(),
                "distributionUrl=file\\:/opt/gradle/custom.tar\n".to_string(),
            ),
        ],
    ));
    assert_eq!(
        configure_gradle_wrapper(&fs, &android_dir(), &run_android()),
        WrapperOutcome::Unchanged
    );
}

#[test]
fn test_prerelease_framework_version() {
    let fs = fs_with("0.75.0-rc.2", "8.5");
    assert_eq!(
        configure_gradle_wrapper(&fs, &android_dir(), &run_android()),
        WrapperOutcome::Updated {
            version: "8.6".into()
        }
    );
}
