//! A command line interface to convert *Capacitated Vehicle Routing Problem* instances.
//!

mod commands;

use clap::Command;
use commands::import::{get_import_app, run_import};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("import", import_matches)) => run_import(import_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("CVRP instance converter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to convert CVRP instances into json description")
        .subcommand(get_import_app())
}
