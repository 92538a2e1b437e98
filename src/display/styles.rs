//! Styling helpers for the portfolio's green-on-black look
//!
//! Semantic formatting functions built on crossterm's `Stylize`, returning
//! `String` so a whole frame can be composed before a single write.

use crossterm::style::Stylize;

/// Format the prompt prefix
pub fn prompt(text: &str) -> String {
    format!("{}", text.green().bold())
}

/// Format banner block text
pub fn banner(text: &str) -> String {
    format!("{}", text.green())
}

/// Format status text as dim
pub fn dim(text: &str) -> String {
    format!("{}", text.dark_grey())
}

/// Format a URL as an activatable OSC 8 hyperlink, underlined for terminals
/// that do not support hyperlinks
pub fn link(url: &str) -> String {
    format!("\x1b]8;;{}\x07{}\x1b]8;;\x07", url, url.blue().underlined())
}

/// Terminal control sequences as strings
pub mod ctrl {
    use crossterm::cursor;
    use crossterm::terminal::{Clear, ClearType};
    use crossterm::Command;

    /// Clear screen
    pub fn clear_screen() -> String {
        let mut buf = String::new();
        let _ = Clear(ClearType::All).write_ansi(&mut buf);
        buf
    }

    /// Clear from cursor to end of line
    pub fn clear_to_eol() -> String {
        let mut buf = String::new();
        let _ = Clear(ClearType::UntilNewLine).write_ansi(&mut buf);
        buf
    }

    /// Move cursor to absolute position (0-indexed)
    pub fn move_to(col: u16, row: u16) -> String {
        let mut buf = String::new();
        let _ = cursor::MoveTo(col, row).write_ansi(&mut buf);
        buf
    }

    /// Carriage return + newline (raw mode needs the explicit CR)
    pub const CRLF: &str = "\r\n";
}
