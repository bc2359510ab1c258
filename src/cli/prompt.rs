//! Interactive board size prompt.

use super::CliError;
use parchis::{FieldSize, FieldSizeError};
use std::io::{BufRead, Write};

/// Ask for a board size until a valid one is entered.
///
/// # Errors
///
/// Returns an error on I/O failure or when the input ends first.
pub(crate) fn read_field_size(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<FieldSize, CliError> {
    loop {
        write!(output, "Enter field size: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::new("no field size given"));
        }

        match line.parse::<FieldSize>() {
            Ok(size) => return Ok(size),
            Err(e) => {
                writeln!(output, "{}", complaint(&e))?;
                writeln!(output, "Try again")?;
            }
        }
    }
}

fn complaint(err: &FieldSizeError) -> &'static str {
    match err {
        FieldSizeError::NotInteger(_) => "Field size must be int!",
        FieldSizeError::TooLarge(_) => "Sorry, it's too many for me",
        FieldSizeError::Invalid(_) => "Field size must be odd and at least 5",
    }
}
