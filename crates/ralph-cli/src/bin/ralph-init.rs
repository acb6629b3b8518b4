//! `ralph-init`: add Ralph to the project in the current directory.

use std::process::ExitCode;

use ralph_cli::{bootstrap, cli::InitCli, commands, finish, output::OutputManager, parse_args};

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli: InitCli = match parse_args() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    let output = OutputManager::new(&cli.global, cli.dry_run);
    let config = match bootstrap(&cli.global, &output) {
        Ok(config) => config,
        Err(code) => return code,
    };
    finish(commands::init::execute(&cli, &config, &output), &cli.global, &output)
}
