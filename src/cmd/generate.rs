use crate::aws::{AwsCli, PROFILE_ENV};
use crate::config::Settings;
use crate::error::AliasResult;
use crate::exec::Executor;
use crate::kubectl::Kubectl;
use log::info;

pub fn build_alias(name: &str, profile: &str, context: &str) -> String {
    format!(
        r#"alias {name}="export {PROFILE_ENV}={profile} && kubectl config use-context {context}""#
    )
}

/// Runs the whole interactive flow and returns the alias definition line.
pub fn handle(exec: &dyn Executor, settings: &Settings, alias: &str) -> AliasResult<String> {
    let aws = AwsCli::new(exec, settings);
    let kubectl = Kubectl::new(exec, settings);

    kubectl.find_cli()?;
    aws.find_cli()?;

    let profile = aws.select_profile()?;
    exec.say("");
    let context = kubectl.select_context()?;
    exec.say("");

    info!("generating alias '{alias}' for profile '{profile}' and context '{context}'");
    Ok(build_alias(alias, &profile, &context))
}
