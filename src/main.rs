mod aws;
mod cmd;
mod config;
mod error;
mod exec;
mod kubectl;
mod menu;

use clap::Parser;
use cmd::{Cli, generate};
use exec::SystemExecutor;
use log::debug;
use owo_colors::{OwoColorize, Stream};
use std::process;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();
    debug!(
        "ekalias v{}: aws={}, kubectl={}",
        env!("CARGO_PKG_VERSION"),
        cli.aws_cli,
        cli.kubectl
    );

    let exec = SystemExecutor::new();

    match generate::handle(&exec, &cli.settings(), &cli.alias) {
        Ok(line) => println!("{}", line.if_supports_color(Stream::Stdout, |text| text.green())),
        Err(err) => {
            let message = format!("error: {err}");
            eprintln!("{}", message.if_supports_color(Stream::Stderr, |text| text.red()));
            process::exit(1);
        }
    }
}
