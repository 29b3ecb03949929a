// License: MIT

//! Collecting configuration text from a stream.

use std::io::{self, BufRead, Read};

use log::debug;

/// Line that ends interactive input, compared case-insensitively after
/// trimming.
pub const SENTINEL: &str = "END";

/// Read lines until the sentinel line or end of input and join them with
/// `\n`. The sentinel itself is dropped; other lines are passed through
/// untouched.
pub fn read_until_sentinel<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_sentinel(&line) {
            debug!("sentinel reached after {} line(s)", lines.len());
            return Ok(lines.join("\n"));
        }
        lines.push(line);
    }

    debug!("input ended without sentinel after {} line(s)", lines.len());
    Ok(lines.join("\n"))
}

/// Read the whole stream as one blob, no sentinel handling.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

fn is_sentinel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(SENTINEL)
}
