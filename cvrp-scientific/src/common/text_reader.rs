use super::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Reads the next line into the buffer, returns amount of bytes read (zero means end of input).
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| format!("cannot read line: '{err}'").into())
}
