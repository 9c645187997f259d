use crate::menu::RetryPolicy;

/// Default values for CLI flags
pub mod defaults {
    /// AWS CLI executable looked up on PATH
    pub const AWS_CLI: &str = "aws";

    /// kubectl executable looked up on PATH
    pub const KUBECTL: &str = "kubectl";

    pub const LOG_LEVEL: &str = "warn";
}

/// Resolved runtime settings. There is no settings file; everything comes
/// from flags or their environment fallbacks.
#[derive(Clone, Debug)]
pub struct Settings {
    pub aws_cli: String,
    pub kubectl: String,
    pub retry: RetryPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aws_cli: defaults::AWS_CLI.to_string(),
            kubectl: defaults::KUBECTL.to_string(),
            retry: RetryPolicy::Unbounded,
        }
    }
}
