//! Interactive project-name capture.
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, Write};

pub const PROJECT_NAME_PROMPT: &str = "Enter the project name: ";

/// Print the prompt and read one line as the project name.
///
/// Only the line terminator is stripped; the name is otherwise used verbatim.
pub fn read_project_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    output
        .write_all(PROJECT_NAME_PROMPT.as_bytes())
        .context("write prompt")?;
    output.flush().context("flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read project name")?;
    if read == 0 {
        return Err(anyhow!("no project name given (stdin closed)"));
    }
    normalize_project_name(&line)
}

/// Strip the line terminator and reject names that would resolve to the base directory.
pub fn normalize_project_name(raw: &str) -> Result<String> {
    let name = raw.strip_suffix('\n').unwrap_or(raw);
    let name = name.strip_suffix('\r').unwrap_or(name);
    if name.is_empty() {
        return Err(anyhow!("project name is empty"));
    }
    Ok(name.to_string())
}
