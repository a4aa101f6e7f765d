mod commands;
mod error;
mod manifest;
mod planner;
mod templates;
mod utils;

use clap::Parser;
use commands::Cli;
use error::ScaffoldError;
use utils::output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::create::run(cli) {
        match &e {
            ScaffoldError::Usage(reason) => output::print_usage(reason),
            _ => output::print_error(&e.to_string()),
        }
        std::process::exit(e.exit_code());
    }
}
