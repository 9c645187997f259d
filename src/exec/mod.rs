mod error;
#[cfg(test)]
mod scripted;
mod system;

pub use error::*;
#[cfg(test)]
pub use scripted::ScriptedExecutor;
pub use system::SystemExecutor;

use std::path::{Path, PathBuf};

/// Everything the selection flows need from the outside world: finding and
/// running external programs, talking to the user, and touching the process
/// environment.
///
/// All methods take `&self`; the tool is strictly sequential and a single
/// executor is shared by every component of one run.
pub trait Executor {
    /// Resolves an executable name against `PATH`.
    fn locate(&self, name: &str) -> ExecResult<PathBuf>;

    /// Runs `program` to completion and returns its standard output.
    /// A non-zero exit is reported as [`ExecError::CommandFailure`].
    fn run_captured(&self, program: &Path, args: &[&str]) -> ExecResult<String>;

    /// Runs `program` attached to the real terminal, capturing nothing.
    fn run_interactive(&self, program: &Path, args: &[&str]) -> ExecResult<()>;

    /// Writes `text` and reads one line, without its line terminator.
    fn prompt(&self, text: &str) -> ExecResult<String>;

    /// Writes one line of informational output to the user.
    fn say(&self, line: &str);

    /// Writes one line of error output to the user.
    fn warn(&self, line: &str);

    fn set_env(&self, key: &str, value: &str);
}

/// Splits captured listing output into one entry per line. Blank lines are
/// kept; menus drop them before display.
pub fn output_lines(stdout: &str) -> Vec<String> {
    stdout
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
