//! The terminal emulator widget
//!
//! Owns the scrollback and the input line, dispatches submitted lines
//! against the command table, and exposes the trimmed visible view. All
//! mutation happens synchronously inside the handler that triggered it;
//! there is exactly one input source, so effects apply in key-press order.

use crate::commands::{CommandKind, CommandSet, Dispatch};
use crate::history::{HistoryBuffer, HistoryEntry};
use crate::input::{InputAction, InputEvent, InputLine};

pub struct Terminal {
    history: HistoryBuffer,
    input: InputLine,
    prompt: String,
    commands: CommandSet,
}

impl Terminal {
    /// Create a widget seeded with initial entries
    ///
    /// The seed and prompt are not re-read after construction.
    pub fn new(
        initial: Vec<HistoryEntry>,
        prompt: impl Into<String>,
        max_visible: usize,
        commands: CommandSet,
    ) -> Self {
        Self {
            history: HistoryBuffer::new(initial, max_visible),
            input: InputLine::new(),
            prompt: prompt.into(),
            commands,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// The trimmed visible suffix of the scrollback
    pub fn visible(&self) -> &[HistoryEntry] {
        self.history.visible()
    }

    /// Feed one key event; Enter submits the current line
    pub fn handle(&mut self, event: InputEvent) {
        if let InputAction::Submit(line) = self.input.handle(event) {
            self.submit(&line);
        }
    }

    /// Submit a line as if it had been typed and entered
    ///
    /// Echoes `prompt + raw` into the scrollback, dispatches the trimmed
    /// text, and resets the input line whichever branch is taken.
    pub fn submit(&mut self, raw: &str) {
        self.history
            .push(HistoryEntry::line(format!("{}{}", self.prompt, raw)));

        match self.commands.dispatch(raw) {
            Dispatch::Silent => {}
            Dispatch::Respond(lines) => {
                for line in lines {
                    self.history.push(HistoryEntry::line(line));
                }
            }
            Dispatch::Fallback(line) => self.history.push(HistoryEntry::line(line)),
            Dispatch::Reset(notice) => self.history.replace_all(HistoryEntry::line(notice)),
        }

        self.input.reset();
    }

    /// Trigger point equivalent to typing the command and pressing Enter
    ///
    /// Any in-progress input text is discarded, exactly as it would be by
    /// submitting.
    pub fn trigger(&mut self, kind: CommandKind) {
        let name = self.commands.name_of(kind).to_string();
        self.submit(&name);
    }
}
