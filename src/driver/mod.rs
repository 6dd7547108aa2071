pub mod handlers;

use std::io::{BufRead, Write};

use crate::protocol::{Command, Event};
use crate::state::GameState;

pub use handlers::handle_command;

/// Run a JSON-lines session: one `Command` per input line, one `Event` per
/// output line. Blank lines are skipped; malformed lines get an error event.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut GameState,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<Command>(line) {
            Ok(cmd) => {
                tracing::debug!("Command: {:?}", cmd);
                handle_command(cmd, state)
            }
            Err(e) => {
                tracing::warn!("Failed to parse command: {}", e);
                Event::Error {
                    code: "BAD_COMMAND".to_string(),
                    msg: e.to_string(),
                }
            }
        };

        serde_json::to_writer(&mut output, &event)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    tracing::info!("Session input closed");
    Ok(())
}
