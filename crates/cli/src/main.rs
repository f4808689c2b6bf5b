use std::process::ExitCode;

use clap::Parser;
use env_logger::init;
use gaelic_fonts_cli::cli::Cli;

fn main() -> ExitCode {
    init();
    Cli::parse().run()
}
