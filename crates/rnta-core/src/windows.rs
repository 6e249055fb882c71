//! Windows solution and project file resolution.

use crate::error::Result;
use crate::platform::{ProjectFile, WindowsConfig, WindowsProject};
use regex::Regex;
use rnta_fs::{FileSystem, NormalizedPath};
use serde::Deserialize;
use std::sync::LazyLock;

/// A project reference under a dependency's generated Windows directory.
///
/// This ties the lookup to the `node_modules/.generated/windows` layout; a
/// solution using any other layout resolves to [`ProjectFile::Unparsed`].
static GENERATED_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^"]*?node_modules[/\\].generated[/\\]windows[/\\].*?\.vcxproj)"#)
        .expect("Invalid generated project regex")
});

/// Windows section of a configuration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsProjectConfig {
    pub source_dir: String,
    pub solution_file: String,
}

/// Find the generated app project referenced by a solution's text.
///
/// `display_path` is embedded in the diagnostic when no reference is found.
pub fn find_project_file(solution: &str, display_path: &str) -> ProjectFile {
    match GENERATED_PROJECT.captures(solution) {
        Some(captures) => ProjectFile::Found(captures[1].to_string()),
        None => ProjectFile::Unparsed {
            solution_file: display_path.to_string(),
        },
    }
}

/// Resolve the Windows config, or `None` when the solution file does not
/// exist (the platform is then left out of the result).
pub fn resolve(
    fs: &dyn FileSystem,
    input: &WindowsProjectConfig,
    project_root: &NormalizedPath,
) -> Result<Option<WindowsConfig>> {
    let solution = project_root.resolve(&input.solution_file);
    if !fs.is_file(&solution) {
        tracing::debug!(solution = %solution, "solution file not found; skipping windows");
        return Ok(None);
    }

    let source_dir = project_root.resolve(&input.source_dir);
    let bytes = fs.read_bytes(&solution)?;
    let project_file = find_project_file(&String::from_utf8_lossy(&bytes), &input.solution_file);
    if let ProjectFile::Unparsed { .. } = project_file {
        tracing::debug!(solution = %solution, "no generated project reference in solution file");
    }

    Ok(Some(WindowsConfig {
        source_dir: input.source_dir.clone(),
        solution_file: solution.relative_to(&source_dir),
        project: WindowsProject { project_file },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project("{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}") = "Example", "node_modules\.generated\windows\ReactApp\Example.vcxproj", "{B44CEAD7-FBFF-4A17-95EA-FF5434BBD79D}"
EndProject
Project("{F2A71F9B-5D33-465A-A702-920D77279786}") = "Microsoft.ReactNative", "..\node_modules\react-native-windows\Microsoft.ReactNative\Microsoft.ReactNative.vcxproj", "{F7D32BD0-2749-483E-9A0D-1635EF7E3136}"
EndProject
"#;

    #[test]
    fn finds_generated_project_with_backslashes() {
        assert_eq!(
            find_project_file(SOLUTION, "windows/Example.sln"),
            ProjectFile::Found(r"node_modules\.generated\windows\ReactApp\Example.vcxproj".into())
        );
    }

    #[test]
    fn finds_generated_project_with_forward_slashes() {
        let solution = r#"Project("{8BC9}") = "MyApp", "node_modules/.generated/windows/MyApp.vcxproj", "{B44C}""#;
        assert_eq!(
            find_project_file(solution, "MyApp.sln").path(),
            Some("node_modules/.generated/windows/MyApp.vcxproj")
        );
    }

    #[test]
    fn missing_reference_yields_diagnostic() {
        let project = find_project_file("Microsoft Visual Studio Solution File", "windows/Example.sln");
        assert_eq!(project.path(), None);
        assert_eq!(project.to_string(), "(Failed to parse 'windows/Example.sln')");
    }
}
