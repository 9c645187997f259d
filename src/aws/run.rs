use crate::config::Settings;
use crate::error::AliasResult;
use crate::exec::Executor;
use crate::menu::Menu;
use std::path::PathBuf;

/// Handle on the AWS CLI. Every call resolves the executable first so a
/// missing CLI surfaces as the same error wherever it is hit.
#[derive(Clone, Copy)]
pub struct AwsCli<'a> {
    pub(super) exec: &'a dyn Executor,
    pub(super) menu: Menu<'a>,
    name: &'a str,
}

impl<'a> AwsCli<'a> {
    pub fn new(exec: &'a dyn Executor, settings: &'a Settings) -> Self {
        Self {
            exec,
            menu: Menu::new(exec).with_retry(settings.retry),
            name: &settings.aws_cli,
        }
    }

    pub fn find_cli(&self) -> AliasResult<PathBuf> {
        Ok(self.exec.locate(self.name)?)
    }

    pub(super) fn run(&self, args: &[&str]) -> AliasResult<String> {
        let aws = self.find_cli()?;
        Ok(self.exec.run_captured(&aws, args)?)
    }

    pub(super) fn run_interactive(&self, args: &[&str]) -> AliasResult<()> {
        let aws = self.find_cli()?;
        Ok(self.exec.run_interactive(&aws, args)?)
    }
}
