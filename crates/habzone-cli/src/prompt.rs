//! Interactive stdin prompts for values not supplied as flags.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Prompt for a single numeric value on stdin.
///
/// Prints the prompt line, reads one line of input, and parses it as a
/// float. Malformed input is fatal; the calculator makes a single pass over
/// its inputs and does not retry.
pub fn prompt_value(label: &str) -> Result<f64> {
    println!("Please enter the {}", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    parse_value(line.trim(), label)
}

/// Parse a numeric value from raw input.
pub fn parse_value(raw: &str, label: &str) -> Result<f64> {
    raw.parse::<f64>()
        .with_context(|| format!("could not parse the {} from input {:?}", label, raw))
}
