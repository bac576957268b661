use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{
    core::{
        dimmer::Dimmer,
        event::{Event, MalformedRecord},
        integrator::energy_over,
    },
    prelude::*,
    quantity::power::Watts,
};

#[derive(Debug, Error)]
pub enum RunError {
    /// Blank input is rejected before parsing is attempted.
    #[error("input line {0} is empty or blank")]
    BlankLine(usize),

    #[error(transparent)]
    Malformed(#[from] MalformedRecord),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Drive the estimator over a line-oriented event stream.
///
/// Stops right after answering the first usage query; later lines are never
/// read. A stream that ends without a usage query is a valid, silent run.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    full_power: Watts,
) -> Result<(), RunError> {
    let mut dimmer = Dimmer::new();
    for (line_index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            return Err(RunError::BlankLine(line_index + 1));
        }
        match Event::parse(&line)? {
            Some(Event::Control(event)) => {
                dimmer.apply(event);
                trace!(%line, level = %dimmer.level(), "applied");
            }
            Some(Event::Usage(interval)) => {
                let energy = energy_over(dimmer.history(), interval, full_power);
                info!(?interval, %energy, "answering the usage query");
                writeln!(output, "{energy}")?;
                break;
            }
            None => debug!(%line, "unrecognized keyword, skipping"),
        }
    }
    Ok(())
}
