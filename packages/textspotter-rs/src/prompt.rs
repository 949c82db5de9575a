use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

pub const TARGET_PROMPT: &str = "Enter target:";

/// Asks the operator for the text to look for and reads one line.
///
/// Only the line terminator is stripped; surrounding spaces are part of the
/// target.
pub fn read_target<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", TARGET_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read target text")?;
    if read == 0 {
        bail!("no target text given (input closed)");
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
