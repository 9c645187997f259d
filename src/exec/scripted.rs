use super::Executor;
use super::error::{ExecError, ExecResult};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

type Reply = Result<String, (Option<i32>, String)>;

/// Test double that plays back scripted replies and command outputs and
/// records everything the code under test asked of it.
///
/// Programs resolve to a path equal to their name, so a command line such as
/// `aws configure list-profiles` is keyed exactly as written.
#[derive(Default)]
pub struct ScriptedExecutor {
    replies: RefCell<VecDeque<String>>,
    outputs: RefCell<HashMap<String, Reply>>,
    missing: HashSet<String>,
    interactive_failures: HashSet<String>,
    prompts: Cell<usize>,
    pub interactive: RefCell<Vec<String>>,
    pub captured: RefCell<Vec<String>>,
    pub transcript: RefCell<Vec<String>>,
    pub env: RefCell<HashMap<String, String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the lines the user will type, in order. Once exhausted,
    /// prompts fail with [`ExecError::InputClosed`].
    pub fn replies<I, S>(self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replies
            .borrow_mut()
            .extend(replies.into_iter().map(Into::into));
        self
    }

    pub fn output(self, command: &str, stdout: &str) -> Self {
        self.outputs
            .borrow_mut()
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn failure(self, command: &str, stderr: &str) -> Self {
        self.outputs
            .borrow_mut()
            .insert(command.to_string(), Err((Some(1), stderr.to_string())));
        self
    }

    pub fn missing(mut self, name: &str) -> Self {
        self.missing.insert(name.to_string());
        self
    }

    pub fn interactive_failure(mut self, command: &str) -> Self {
        self.interactive_failures.insert(command.to_string());
        self
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.get()
    }

    pub fn transcript_contains(&self, needle: &str) -> bool {
        self.transcript
            .borrow()
            .iter()
            .any(|line| line.contains(needle))
    }
}

fn command_line(program: &Path, args: &[&str]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().map(|arg| arg.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Executor for ScriptedExecutor {
    fn locate(&self, name: &str) -> ExecResult<PathBuf> {
        if self.missing.contains(name) {
            return Err(ExecError::NotFound {
                name: name.to_string(),
                reason: "cannot find binary path".to_string(),
            });
        }
        Ok(PathBuf::from(name))
    }

    fn run_captured(&self, program: &Path, args: &[&str]) -> ExecResult<String> {
        let line = command_line(program, args);
        self.captured.borrow_mut().push(line.clone());

        match self.outputs.borrow().get(&line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err((code, stderr))) => Err(ExecError::CommandFailure {
                program: program.display().to_string(),
                code: *code,
                stderr: stderr.clone(),
            }),
            None => Err(ExecError::CommandFailure {
                program: program.display().to_string(),
                code: None,
                stderr: format!("unscripted command: {line}"),
            }),
        }
    }

    fn run_interactive(&self, program: &Path, args: &[&str]) -> ExecResult<()> {
        let line = command_line(program, args);
        self.interactive.borrow_mut().push(line.clone());

        if self.interactive_failures.contains(&line) {
            return Err(ExecError::InteractiveFailure {
                program: program.display().to_string(),
                code: Some(255),
            });
        }
        Ok(())
    }

    fn prompt(&self, text: &str) -> ExecResult<String> {
        self.prompts.set(self.prompts.get() + 1);
        self.transcript.borrow_mut().push(text.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or(ExecError::InputClosed)
    }

    fn say(&self, line: &str) {
        self.transcript.borrow_mut().push(line.to_string());
    }

    fn warn(&self, line: &str) {
        self.transcript.borrow_mut().push(line.to_string());
    }

    fn set_env(&self, key: &str, value: &str) {
        self.env
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
