#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use cvrp_scientific::common::InfoLogger;
use cvrp_scientific::models::{Instance, serialize_instance};
use cvrp_scientific::tsplib::{InstanceParser, ParserConfig, read_config};
use std::sync::Arc;

pub const FORMAT_ARG_NAME: &str = "FORMAT";
pub const INPUT_ARG_NAME: &str = "INPUT";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const CONFIG_ARG_NAME: &str = "config";
pub const PRETTY_ARG_NAME: &str = "pretty";
pub const VERBOSE_ARG_NAME: &str = "verbose";

const TSPLIB_FORMAT: &str = "tsplib";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Imports instance from text format and writes it as json description")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser([TSPLIB_FORMAT])
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets the instance file to use, '-' reads from standard input")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json file with parser configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PRETTY_ARG_NAME)
                .help("Writes json in human readable form")
                .short('p')
                .long(PRETTY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(VERBOSE_ARG_NAME)
                .help("Prints parsing details to standard error")
                .short('v')
                .long(VERBOSE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_import(matches: &ArgMatches) -> Result<(), String> {
    let instance = import_instance_from_args(matches).map_err(|err| format!("cannot import instance: '{err}'"))?;

    let out_result = matches
        .get_one::<String>(OUT_RESULT_ARG_NAME)
        .map(|path| create_file(path, "out result"))
        .transpose()?;
    let mut out_buffer = create_write_buffer(out_result);

    serialize_instance(&mut out_buffer, &instance, matches.get_flag(PRETTY_ARG_NAME))
        .map_err(|err| format!("cannot write instance: '{err}'"))
}

fn import_instance_from_args(matches: &ArgMatches) -> Result<Instance, String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or(TSPLIB_FORMAT);
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input file is not specified")?;

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?,
        None => ParserConfig::default(),
    };

    let parser = InstanceParser::new(config);
    let parser = if matches.get_flag(VERBOSE_ARG_NAME) { parser.with_logger(create_logger()) } else { parser };

    match input_format {
        TSPLIB_FORMAT => parser.read(create_read_buffer(input_path, "input")?).map_err(|err| err.to_string()),
        _ => Err(format!("unknown format: '{input_format}'")),
    }
}

fn create_logger() -> InfoLogger {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}
