//! `ralph-setup`: create a new Ralph project directory.

use std::process::ExitCode;

use ralph_cli::{bootstrap, cli::SetupCli, commands, finish, output::OutputManager, parse_args};

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli: SetupCli = match parse_args() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    let output = OutputManager::new(&cli.global, false);
    let config = match bootstrap(&cli.global, &output) {
        Ok(config) => config,
        Err(code) => return code,
    };
    finish(commands::setup::execute(&cli, &config, &output), &cli.global, &output)
}
