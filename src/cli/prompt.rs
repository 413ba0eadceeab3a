use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Ask a yes/no question on stdin. End of input counts as "no".
pub fn confirm(question: &str) -> Result<bool> {
    confirm_from(question, &mut io::stdin().lock(), &mut io::stdout().lock())
}

pub fn confirm_from<R: BufRead, W: Write>(
    question: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool> {
    write!(writer, "{} (y/n): ", question)?;
    writer.flush()?;

    let mut answer = String::new();
    let read = reader
        .read_line(&mut answer)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        writeln!(writer)?;
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
