use super::Executor;
use super::error::{ExecError, ExecResult};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::Duration;

/// Executor backed by the real process: `PATH` lookup, child processes,
/// stdin for replies and stderr for everything shown to the user.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SystemExecutor {
    fn locate(&self, name: &str) -> ExecResult<PathBuf> {
        let path = which::which(name).map_err(|err| ExecError::NotFound {
            name: name.to_string(),
            reason: err.to_string(),
        })?;

        debug!("located {name} at {}", path.display());
        Ok(path)
    }

    fn run_captured(&self, program: &Path, args: &[&str]) -> ExecResult<String> {
        debug!("running {} {}", program.display(), args.join(" "));

        let spinner = spinner(program, args);
        let output = Command::new(program).args(args).output();
        spinner.finish_and_clear();

        let output = output.map_err(ExecError::Spawn)?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(failure(program, output.status, stderr))
    }

    fn run_interactive(&self, program: &Path, args: &[&str]) -> ExecResult<()> {
        debug!("running {} {} interactively", program.display(), args.join(" "));

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(ExecError::Spawn)?;

        match status.success() {
            true => Ok(()),
            false => Err(ExecError::InteractiveFailure {
                program: program.display().to_string(),
                code: status.code(),
            }),
        }
    }

    fn prompt(&self, text: &str) -> ExecResult<String> {
        eprint!("{text}");
        read_line(&mut io::stdin().lock())
    }

    fn say(&self, line: &str) {
        eprintln!("{line}");
    }

    fn warn(&self, line: &str) {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |text| text.red()));
    }

    fn set_env(&self, key: &str, value: &str) {
        debug!("setting {key}={value}");
        // SAFETY: ekalias is single threaded; nothing else reads the environment concurrently.
        unsafe { std::env::set_var(key, value) }
    }
}

fn failure(program: &Path, status: ExitStatus, stderr: String) -> ExecError {
    ExecError::CommandFailure {
        program: program.display().to_string(),
        code: status.code(),
        stderr,
    }
}

fn spinner(program: &Path, args: &[&str]) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        spinner.set_style(style);
    }

    let name = program
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());
    spinner.set_message(format!("{name} {}", args.join(" ")));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Reads a single line and strips the trailing `\n` / `\r\n`.
/// End of input is an error, never an empty reply.
pub(super) fn read_line<R: BufRead>(reader: &mut R) -> ExecResult<String> {
    let mut line = String::new();

    match reader.read_line(&mut line) {
        Ok(0) => Err(ExecError::InputClosed),
        Ok(_) => {
            let trimmed = line.strip_suffix('\n').unwrap_or(&line);
            let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
            Ok(trimmed.to_string())
        }
        Err(err) => Err(ExecError::Input(err)),
    }
}
