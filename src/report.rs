//! Console rendering of a check result

use std::io::{self, Write};

use crate::driver::checker::CheckOutcome;
use crate::driver::error::CheckError;

/// Hint printed after any connection error
pub const CONNECTION_HINT: &str = "Verify the URL is correct and your internet connection";

/// Write exactly one of the three outcomes to `out`
pub fn render<W: Write>(result: &Result<CheckOutcome, CheckError>, out: &mut W) -> io::Result<()> {
    match result {
        Ok(CheckOutcome::NewerAvailable { label, link }) => {
            writeln!(out, "New driver available: {label}")?;
            writeln!(out, "Download URL: {link}")?;
        }
        Ok(CheckOutcome::UpToDate { known_driver }) => {
            writeln!(
                out,
                "You already have the latest driver version {known_driver}."
            )?;
        }
        Err(err) => {
            writeln!(out, "Connection error: {err}")?;
            writeln!(out, "{CONNECTION_HINT}")?;
        }
    }
    out.flush()
}
