mod eks;
mod profile;
mod run;

pub use profile::PROFILE_ENV;
pub use run::AwsCli;
