//! Line input for the terminal widget
//!
//! Readline-lite editing over the in-progress command text: insert,
//! backspace/delete, cursor movement, home/end. The cursor offset always
//! stays within [0, text length]; edits at the boundaries are no-ops.

use tui_input::{Input, InputRequest};

/// A key event the input line understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character
    Char(char),
    /// Submit the current line
    Enter,
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character at the cursor
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Result of handling an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing changed
    None,
    /// Input text or cursor changed; redraw the line
    Redraw,
    /// The given line was submitted (possibly empty)
    Submit(String),
}

/// Current in-progress command text with cursor position
#[derive(Default)]
pub struct InputLine {
    input: Input,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor offset in characters, always within [0, len]
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    fn char_len(&self) -> usize {
        self.input.value().chars().count()
    }

    /// Handle one event
    pub fn handle(&mut self, event: InputEvent) -> InputAction {
        match event {
            InputEvent::Char(c) => {
                self.input.handle(InputRequest::InsertChar(c));
                InputAction::Redraw
            }
            InputEvent::Enter => InputAction::Submit(self.take()),
            InputEvent::Backspace => {
                if self.input.cursor() > 0 {
                    self.input.handle(InputRequest::DeletePrevChar);
                    InputAction::Redraw
                } else {
                    InputAction::None
                }
            }
            InputEvent::Delete => {
                if self.input.cursor() < self.char_len() {
                    self.input.handle(InputRequest::DeleteNextChar);
                    InputAction::Redraw
                } else {
                    InputAction::None
                }
            }
            InputEvent::Left => {
                if self.input.cursor() > 0 {
                    self.input.handle(InputRequest::GoToPrevChar);
                    InputAction::Redraw
                } else {
                    InputAction::None
                }
            }
            InputEvent::Right => {
                if self.input.cursor() < self.char_len() {
                    self.input.handle(InputRequest::GoToNextChar);
                    InputAction::Redraw
                } else {
                    InputAction::None
                }
            }
            InputEvent::Home => {
                self.input.handle(InputRequest::GoToStart);
                InputAction::Redraw
            }
            InputEvent::End => {
                self.input.handle(InputRequest::GoToEnd);
                InputAction::Redraw
            }
        }
    }

    /// Take the current line, resetting the editor to empty/offset 0
    pub fn take(&mut self) -> String {
        let line = self.input.value().to_string();
        self.input.reset();
        line
    }

    /// Reset to empty/offset 0, discarding any in-progress text
    pub fn reset(&mut self) {
        self.input.reset();
    }
}
