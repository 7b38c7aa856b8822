//! Interactive assistant: command parsing, handlers and the read-eval-print
//! loop.

pub mod command;
pub mod handlers;
pub mod session;

pub use command::{parse_input, Command};
pub use session::{Flow, Reply, Session};

use crate::repositories::AddressBookRepository;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Greeting printed when the loop starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every line.
pub const PROMPT: &str = "Enter a command: ";

/// Run the loop until `close`/`exit` or end of input.
///
/// End of input is treated as `exit`, so the book is still saved, and so is a
/// failed read. Bytes that are not UTF-8 are replaced rather than rejected.
/// Returns the final flow, which tells whether saving succeeded.
pub fn run_repl<R, I, O>(session: &mut Session<R>, mut input: I, output: &mut O) -> io::Result<Flow>
where
    R: AddressBookRepository,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", WELCOME)?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let line = match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                writeln!(output)?;
                info!("End of input, closing session");
                "exit".to_string()
            }
            Ok(_) => String::from_utf8_lossy(&buf).into_owned(),
            Err(e) => {
                writeln!(output)?;
                warn!("Failed to read input, closing session: {}", e);
                "exit".to_string()
            }
        };

        let reply = session.handle_line(&line);
        if !reply.output.is_empty() {
            writeln!(output, "{}", reply.output)?;
        }
        if reply.is_exit() {
            return Ok(reply.flow);
        }
    }
}
