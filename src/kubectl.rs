use crate::aws::AwsCli;
use crate::config::Settings;
use crate::error::AliasResult;
use crate::exec::{Executor, output_lines};
use crate::menu::Menu;
use std::path::PathBuf;

pub struct Kubectl<'a> {
    exec: &'a dyn Executor,
    menu: Menu<'a>,
    name: &'a str,
    aws: AwsCli<'a>,
}

impl<'a> Kubectl<'a> {
    pub fn new(exec: &'a dyn Executor, settings: &'a Settings) -> Self {
        Self {
            exec,
            menu: Menu::new(exec).with_retry(settings.retry),
            name: &settings.kubectl,
            aws: AwsCli::new(exec, settings),
        }
    }

    pub fn find_cli(&self) -> AliasResult<PathBuf> {
        Ok(self.exec.locate(self.name)?)
    }

    pub fn list_contexts(&self) -> AliasResult<Vec<String>> {
        let kubectl = self.find_cli()?;
        let stdout = self
            .exec
            .run_captured(&kubectl, &["config", "get-contexts", "-o", "name"])?;
        Ok(output_lines(&stdout))
    }

    /// Picks an existing context, or links a new EKS cluster to create one.
    pub fn select_context(&self) -> AliasResult<String> {
        let contexts = self.list_contexts()?;
        self.menu
            .select_or_create(&contexts, "Kube Context", &mut || self.aws.link_new_context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AliasError;
    use crate::exec::{ExecError, ScriptedExecutor};

    const CONTEXTS: &str = "kubectl config get-contexts -o name";

    #[test]
    fn list_contexts_splits_lines() {
        let exec = ScriptedExecutor::new().output(CONTEXTS, "a\nb\nc");
        let settings = Settings::default();

        let contexts = Kubectl::new(&exec, &settings).list_contexts().unwrap();
        assert_eq!(contexts, vec!["a", "b", "c"]);
    }

    #[test]
    fn list_contexts_propagates_failures() {
        let settings = Settings::default();

        let exec = ScriptedExecutor::new().missing("kubectl");
        let err = Kubectl::new(&exec, &settings).list_contexts().unwrap_err();
        assert!(matches!(err, AliasError::Exec(ExecError::NotFound { .. })));

        let exec = ScriptedExecutor::new().failure(CONTEXTS, "no kubeconfig");
        let err = Kubectl::new(&exec, &settings).list_contexts().unwrap_err();
        assert!(matches!(err, AliasError::Exec(ExecError::CommandFailure { .. })));
    }

    #[test]
    fn select_existing_context() {
        let exec = ScriptedExecutor::new()
            .output(CONTEXTS, "a\nb\nc\n")
            .replies(["2"]);
        let settings = Settings::default();

        let selected = Kubectl::new(&exec, &settings).select_context().unwrap();

        assert_eq!(selected, "b");
        assert!(exec.transcript_contains("4. Create New"));
    }

    #[test]
    fn create_new_context_links_a_cluster() {
        let exec = ScriptedExecutor::new()
            .output(CONTEXTS, "")
            .output(
                "aws eks list-clusters --region eu-west-1",
                r#"{"clusters": ["prod"]}"#,
            )
            .output(
                "aws eks update-kubeconfig --region eu-west-1 --name prod --alias prod-eu",
                "Updated context prod-eu in /home/u/.kube/config",
            )
            .replies(["1", "eu-west-1", "1", "prod-eu"]);
        let settings = Settings::default();

        let selected = Kubectl::new(&exec, &settings).select_context().unwrap();

        assert_eq!(selected, "prod-eu");
    }

    #[test]
    fn failed_link_is_retried() {
        let exec = ScriptedExecutor::new()
            .output(CONTEXTS, "a")
            .output("aws eks list-clusters --region nowhere", r#"{"clusters": []}"#)
            .output(
                "aws eks list-clusters --region us-east-1",
                r#"{"clusters": ["b"]}"#,
            )
            .output(
                "aws eks update-kubeconfig --region us-east-1 --name b",
                "Updated context arn:aws:eks:us-east-1:111:cluster/b in /home/u/.kube/config",
            )
            .replies(["2", "nowhere", "us-east-1", "1", ""]);
        let settings = Settings::default();

        let selected = Kubectl::new(&exec, &settings).select_context().unwrap();

        assert_eq!(selected, "arn:aws:eks:us-east-1:111:cluster/b");
        assert!(exec.transcript_contains("no clusters found in region 'nowhere'"));
    }
}
