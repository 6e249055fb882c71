//! Signals from the invoking process: its arguments and environment.

/// Environment variable that disables Gradle wrapper normalization when `0`.
pub const GRADLE_WRAPPER_ENV: &str = "RNTA_CONFIGURE_GRADLE_WRAPPER";

/// Commands that build or run the Android app.
pub const ANDROID_COMMANDS: [&str; 2] = ["build-android", "run-android"];

/// What the surrounding process is doing, captured once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Process arguments, including the command being run.
    pub args: Vec<String>,
    /// Whether Gradle wrapper normalization is allowed at all.
    pub configure_gradle_wrapper: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            configure_gradle_wrapper: true,
        }
    }
}

impl ExecutionContext {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Capture `std::env::args()` and [`GRADLE_WRAPPER_ENV`].
    pub fn from_env() -> Self {
        let enabled = std::env::var(GRADLE_WRAPPER_ENV).map_or(true, |value| value != "0");
        Self::new(std::env::args()).with_gradle_wrapper(enabled)
    }

    pub fn with_gradle_wrapper(mut self, enabled: bool) -> Self {
        self.configure_gradle_wrapper = enabled;
        self
    }

    /// Whether the invoked command builds or runs the Android app.
    pub fn is_android_build(&self) -> bool {
        self.args
            .iter()
            .any(|arg| ANDROID_COMMANDS.contains(&arg.as_str()))
    }

    pub fn should_configure_gradle_wrapper(&self) -> bool {
        self.configure_gradle_wrapper && self.is_android_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_commands_enable_wrapper_normalization() {
        let context = ExecutionContext::new(["react-native", "run-android"]);
        assert!(context.is_android_build());
        assert!(context.should_configure_gradle_wrapper());
    }

    #[test]
    fn other_commands_do_not() {
        let context = ExecutionContext::new(["react-native", "run-ios"]);
        assert!(!context.should_configure_gradle_wrapper());
        assert!(!ExecutionContext::default().is_android_build());
    }

    #[test]
    fn flag_disables_normalization() {
        let context = ExecutionContext::new(["build-android"]).with_gradle_wrapper(false);
        assert!(context.is_android_build());
        assert!(!context.should_configure_gradle_wrapper());
    }
}
