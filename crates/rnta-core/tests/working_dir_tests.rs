//! Runs in its own test binary: it changes the process working directory.

use pretty_assertions::assert_eq;
use rnta_core::{ConfigureOptions, ConfigureRequest, configure_projects, find_project_root};
use rnta_fs::{NormalizedPath, RealFs, find_nearest};
use rnta_test_utils::{TestProject, fixtures};
use serde_json::json;

#[test]
fn test_project_root_found_from_relative_start_in_subdirectory() {
    let project = TestProject::new();
    project.write_files([fixtures::sentinel()]);
    project.write("android/build.gradle", "");
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(project.root().join("android")).unwrap();

    let here = NormalizedPath::new(".");
    let nearest = find_nearest(&RealFs, "react-native.config.js", &here);
    let root = find_project_root(&RealFs, &here);
    let request: ConfigureRequest =
        serde_json::from_value(json!({ "android": { "sourceDir": "android" } })).unwrap();
    let configs = configure_projects(&RealFs, &request, &ConfigureOptions::new("."));

    std::env::set_current_dir(previous).unwrap();

    assert_eq!(nearest, Some(project.path()));
    assert_eq!(root.unwrap(), project.path());
    assert_eq!(
        configs.unwrap().android().unwrap().manifest_path,
        "../node_modules/react-native-test-app/android/app/src/main/AndroidManifest.xml"
    );
}
