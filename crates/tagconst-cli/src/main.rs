//! tagconst CLI: the `tagconst` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { target, json } => commands::generate::run(target, json),
        Commands::Check { target, json } => commands::check::run(target, json),
        Commands::Print { target } => commands::print::run(target),
    }
}
