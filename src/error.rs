use crate::exec::ExecError;
use thiserror::Error;

pub type AliasResult<T> = Result<T, AliasError>;

#[derive(Debug, Error)]
pub enum AliasError {
    #[error(transparent)]
    Exec(#[from] ExecError),
    #[error("invalid input, profile name cannot be empty")]
    EmptyProfileName,
    #[error("invalid input, profile name cannot have spaces: '{0}'")]
    InvalidProfileName(String),
    #[error("invalid input, profile name already exists: '{0}'")]
    ProfileExists(String),
    #[error("no clusters found in region '{region}'")]
    NoClusters { region: String },
    #[error("Failed to parse cluster list: {0}")]
    ClusterListDecode(#[from] serde_json::Error),
    #[error("invalid input, region cannot be empty")]
    EmptyRegion,
    #[error("no {description} available to select")]
    EmptyList { description: String },
    #[error("gave up creating a new {description} after {attempts} attempts: {last}")]
    CreateAttemptsExhausted {
        description: String,
        attempts: u32,
        last: Box<AliasError>,
    },
}

impl AliasError {
    /// Input-stream failures end the run wherever they happen.
    pub fn is_input(&self) -> bool {
        matches!(self, AliasError::Exec(err) if err.is_input())
    }
}
