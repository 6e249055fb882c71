//! File contents for typical test app project layouts.
//!
//! Each helper returns `(path, content)` pairs with paths relative to the
//! project root, ready for [`rnta_fs::MemoryFs::with_files`] (after
//! prefixing a root) or [`TestProject::write_files`](crate::TestProject::write_files).

use serde_json::json;

/// Sentinel file marking the project root.
pub fn sentinel() -> (String, String) {
    (
        "react-native.config.js".to_string(),
        "module.exports = {};\n".to_string(),
    )
}

/// `node_modules/<name>/package.json` declaring `version`.
pub fn installed_package(name: &str, version: &str) -> (String, String) {
    (
        format!("node_modules/{name}/package.json"),
        json!({ "name": name, "version": version }).to_string(),
    )
}

/// `app.json` with an Android package name.
pub fn app_manifest_with_package(package: &str) -> (String, String) {
    (
        "app.json".to_string(),
        json!({
            "name": "Example",
            "displayName": "Example",
            "android": { "package": package },
            "resources": ["dist/res", "dist/main.android.jsbundle"]
        })
        .to_string(),
    )
}

/// Gradle wrapper properties pinning `version`.
pub fn gradle_wrapper(source_dir: &str, version: &str) -> (String, String) {
    (
        format!("{source_dir}/gradle/wrapper/gradle-wrapper.properties"),
        format!(
            "distributionBase=GRADLE_USER_HOME\n\
             distributionPath=wrapper/dists\n\
             distributionUrl=https\\://services.gradle.org/distributions/gradle-{version}-bin.zip\n\
             networkTimeout=10000\n\
             zipStoreBase=GRADLE_USER_HOME\n\
             zipStorePath=wrapper/dists\n"
        ),
    )
}

/// A Visual Studio solution referencing `project` (use an empty string for
/// a solution without any generated project).
pub fn solution(path: &str, project: &str) -> (String, String) {
    let mut content = String::from(
        "Microsoft Visual Studio Solution File, Format Version 12.00\n\
         # Visual Studio Version 17\n",
    );
    if !project.is_empty() {
        content.push_str(&format!(
            "Project(\"{{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}}\") = \"Example\", \"{project}\", \"{{B44CEAD7-FBFF-4A17-95EA-FF5434BBD79D}}\"\nEndProject\n"
        ));
    }
    content.push_str("Global\nEndGlobal\n");
    (path.to_string(), content)
}

/// Prefix every path with `root`, for in-memory filesystems.
pub fn rooted(root: &str, files: impl IntoIterator<Item = (String, String)>) -> Vec<(String, String)> {
    let root = root.trim_end_matches('/');
    files
        .into_iter()
        .map(|(path, content)| (format!("{root}/{path}"), content))
        .collect()
}
