//! vcardphoto - Convert images into vCard 3.0 PHOTO properties.

mod cli;
mod config;
mod image;
mod logger;
mod vcard;

use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use cli::{Cli, convert};
use config::RunConfig;

/// Exit code for command-line usage errors (sysexits.h EX_USAGE).
const EX_USAGE: u8 = 64;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit cleanly; every other
        // parse failure is a usage error
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::from(EX_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RunConfig::from_cli(&cli);
    logger::set_verbose(config.verbose);

    match convert::run(&config, &cli.paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}
