use std::io;
use thiserror::Error;

pub type ExecResult<T> = Result<T, ExecError>;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Unable to find {name} on PATH: {reason}")]
    NotFound { name: String, reason: String },
    #[error("{program} failed with code {code:?}: {stderr}")]
    CommandFailure {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("{program} exited with code {code:?}")]
    InteractiveFailure { program: String, code: Option<i32> },
    #[error("Failed to launch command: {0}")]
    Spawn(#[source] io::Error),
    #[error("Input stream closed")]
    InputClosed,
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),
}

impl ExecError {
    pub fn is_input(&self) -> bool {
        matches!(self, ExecError::InputClosed | ExecError::Input(_))
    }
}
