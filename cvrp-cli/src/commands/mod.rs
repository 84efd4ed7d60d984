pub mod import;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write, stdin, stdout};

const STDIN_PATH: &str = "-";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn create_read_buffer(path: &str, description: &str) -> Result<BufReader<Box<dyn Read>>, String> {
    if path == STDIN_PATH {
        Ok(BufReader::new(Box::new(stdin()) as Box<dyn Read>))
    } else {
        open_file(path, description).map(|file| BufReader::new(Box::new(file) as Box<dyn Read>))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}
