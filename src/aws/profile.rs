use super::run::AwsCli;
use crate::error::{AliasError, AliasResult};
use crate::exec::output_lines;
use log::{info, warn};

pub const PROFILE_ENV: &str = "AWS_PROFILE";

impl AwsCli<'_> {
    pub fn list_profiles(&self) -> AliasResult<Vec<String>> {
        let stdout = self.run(&["configure", "list-profiles"])?;
        Ok(output_lines(&stdout))
    }

    /// Exact, case-sensitive lookup. A failed listing counts as "does not
    /// exist" so profile creation can still go ahead.
    pub fn profile_exists(&self, name: &str) -> bool {
        match self.list_profiles() {
            Ok(profiles) => profiles.iter().any(|profile| profile == name),
            Err(err) => {
                warn!("could not list profiles, assuming '{name}' is unused: {err}");
                false
            }
        }
    }

    fn validate_profile_name(&self, name: &str) -> AliasResult<()> {
        if name.is_empty() {
            return Err(AliasError::EmptyProfileName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(AliasError::InvalidProfileName(name.to_string()));
        }
        if self.profile_exists(name) {
            return Err(AliasError::ProfileExists(name.to_string()));
        }
        Ok(())
    }

    /// Asks for a new profile name and hands over to `aws configure` on the
    /// real terminal. An invalid name is returned as an error straight away;
    /// asking again is up to the caller.
    pub fn create_profile(&self) -> AliasResult<String> {
        let sso = self.exec.prompt("Use SSO? (y/N): ")? == "y";
        let name = self.exec.prompt("AWS Profile Name: ")?;

        self.validate_profile_name(&name)?;

        let mut args = vec!["configure", "--profile", name.as_str()];
        if sso {
            args.push("sso");
        }
        self.run_interactive(&args)?;

        info!("configured profile '{name}' (sso: {sso})");
        Ok(name)
    }

    /// Lets the user pick or create a profile and exports it as
    /// `AWS_PROFILE` for the rest of the run.
    pub fn select_profile(&self) -> AliasResult<String> {
        let profiles = self.list_profiles()?;
        let selected = self
            .menu
            .select_or_create(&profiles, "AWS Profile", &mut || self.create_profile())?;

        self.exec.set_env(PROFILE_ENV, &selected);
        Ok(selected)
    }
}
