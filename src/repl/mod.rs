//! Interactive command loop.
//!
//! Reads one command per line, hands it to [`AssistantBot`] and writes the
//! reply back. The loop is generic over its input and output so sessions
//! can be replayed from tests.

pub mod handlers;
pub mod parser;

pub use handlers::{AssistantBot, Reply};
pub use parser::{parse_input, Command};

use std::io::{self, BufRead, Write};

/// Run the assistant until `close`/`exit` or end of input.
///
/// Blank lines are skipped without a reply.
pub fn run_repl<R, W>(
    bot: &mut AssistantBot,
    prompt: &str,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", handlers::WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            tracing::info!("End of input reached");
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = bot.handle_line(&line);
        writeln!(output, "{}", reply.message())?;
        if reply.is_exit() {
            break;
        }
    }

    Ok(())
}
