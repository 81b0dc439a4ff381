//! Console collaborators: menus and answers over stdin, events over stdout

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use combat_core::{BattleEvent, ChoiceSource, Reporter};

/// Prints each menu and reads one line per answer
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        ConsoleInput::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        ConsoleInput { reader, prompt }
    }
}

impl<R: BufRead, W: Write> ChoiceSource for ConsoleInput<R, W> {
    fn prompt_choice(&mut self, menu: &str) -> Option<String> {
        if let Err(error) = write!(self.prompt, "{menu}").and_then(|()| self.prompt.flush()) {
            tracing::warn!(%error, "failed to show menu");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!("input closed");
                None
            }
            Ok(_) => Some(line),
            Err(error) => {
                tracing::warn!(%error, "failed to read choice");
                None
            }
        }
    }
}

/// Writes each event's narrative text on its own line
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &BattleEvent) {
        if let Err(error) = writeln!(self.out, "{event}") {
            tracing::warn!(%error, "failed to write battle event");
        }
    }
}
