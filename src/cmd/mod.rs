pub mod generate;

use crate::config::{Settings, defaults};
use crate::menu::RetryPolicy;
use clap::Parser;
use std::num::NonZeroU32;

#[derive(Parser)]
#[command(
    name = "ekalias",
    version,
    about = "generate shell aliases for switching AWS profiles and kube contexts",
    long_about = "Walks through choosing (or creating) an AWS profile and a kubectl context, then prints a shell alias that switches to both in one step."
)]
pub struct Cli {
    /// Name of the alias to generate
    pub alias: String,

    /// AWS CLI executable to look up on PATH
    #[arg(long, env = "EKALIAS_AWS_CLI", default_value = defaults::AWS_CLI)]
    pub aws_cli: String,

    /// kubectl executable to look up on PATH
    #[arg(long, env = "EKALIAS_KUBECTL", default_value = defaults::KUBECTL)]
    pub kubectl: String,

    /// Stop retrying a failing "Create New" after this many attempts (default: keep asking)
    #[arg(long, env = "EKALIAS_MAX_CREATE_ATTEMPTS")]
    pub max_create_attempts: Option<NonZeroU32>,

    /// Log filter passed to env_logger (error, warn, info, debug, trace)
    #[arg(long, env = "EKALIAS_LOG", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            aws_cli: self.aws_cli.clone(),
            kubectl: self.kubectl.clone(),
            retry: RetryPolicy::from(self.max_create_attempts),
        }
    }
}
