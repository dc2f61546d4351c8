//! Read-eval-print loop over a session.

use std::io::{self, BufRead, Write};

use companies_engine::DirectoryHandle;

use crate::commands::{apply_command, parse_command, Outcome};
use crate::render::render_snapshot;

const PROMPT: &str = "> ";

/// Render the current view, then apply one command per input line.
///
/// Errors are printed and leave the session unchanged. Returns on `quit`
/// or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    handle: &DirectoryHandle,
    input: R,
    mut output: W,
) -> io::Result<()> {
    output.write_all(render_snapshot(&handle.snapshot()).as_bytes())?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }

        match parse_command(&line).and_then(|command| apply_command(command, handle)) {
            Ok(Outcome::Render) => {
                output.write_all(render_snapshot(&handle.snapshot()).as_bytes())?;
            }
            Ok(Outcome::Print(text)) => output.write_all(text.as_bytes())?,
            Ok(Outcome::Quit) => return Ok(()),
            Err(e) => {
                tracing::warn!("Rejected input {:?}: {}", line, e);
                writeln!(output, "Error: {}", e)?;
            }
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
