//! Rendering the widget to terminal output
//!
//! Converts the visible scrollback suffix and the input line into one ANSI
//! frame string. Rendering reads the widget; it never mutates it.

use unicode_display_width::width;

use super::styles::{self, ctrl};
use crate::history::{EntryKind, HistoryEntry};
use crate::linkify::{linkify, Segment};
use crate::terminal::Terminal;

/// Configuration for rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Terminal width in columns
    pub width: u16,
    /// Dim hint line drawn under the input, if any
    pub hint: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            hint: None,
        }
    }
}

/// Render a single history entry to a string
pub fn render_entry(entry: &HistoryEntry, _config: &RenderConfig) -> String {
    match entry.kind() {
        EntryKind::Banner => entry
            .text()
            .lines()
            .map(styles::banner)
            .collect::<Vec<_>>()
            .join(ctrl::CRLF),
        EntryKind::Line => {
            let mut output = String::new();
            for segment in linkify(entry.text()) {
                match segment {
                    Segment::Text(text) => output.push_str(&text),
                    Segment::Link(url) => output.push_str(&styles::link(&url)),
                }
            }
            output
        }
    }
}

/// Render a full frame: visible scrollback, then the prompt and input line
/// with the cursor parked at its offset
pub fn render_screen(term: &Terminal, config: &RenderConfig) -> String {
    let mut frame = String::new();
    frame.push_str(&ctrl::move_to(0, 0));
    frame.push_str(&ctrl::clear_screen());

    let mut row: u16 = 0;
    for entry in term.visible() {
        frame.push_str(&render_entry(entry, config));
        frame.push_str(ctrl::CRLF);
        row = row.saturating_add(entry.weight() as u16);
    }

    frame.push_str(&styles::prompt(term.prompt()));
    frame.push_str(term.input().value());

    if let Some(hint) = &config.hint {
        frame.push_str(ctrl::CRLF);
        frame.push_str(&styles::dim(hint));
    }

    // Cursor column accounts for display width, not char count
    let before_cursor: String = term
        .input()
        .value()
        .chars()
        .take(term.input().cursor())
        .collect();
    let col = width(term.prompt()) + width(&before_cursor);
    let col = col.min(u64::from(config.width.saturating_sub(1))) as u16;
    frame.push_str(&ctrl::move_to(col, row));

    frame
}

/// Count the number of terminal lines in rendered output
pub fn count_lines(rendered: &str) -> usize {
    if rendered.is_empty() {
        0
    } else {
        rendered.matches(ctrl::CRLF).count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandSet;
    use crate::config::Config;

    fn widget() -> Terminal {
        let config = Config::default();
        Terminal::new(
            vec![HistoryEntry::line("hello"), HistoryEntry::banner("==\n==")],
            config.prompt.clone(),
            config.max_visible,
            CommandSet::from_config(&config),
        )
    }

    #[test]
    fn test_render_plain_line() {
        let config = RenderConfig::default();
        let rendered = render_entry(&HistoryEntry::line("no links here"), &config);
        assert_eq!(rendered, "no links here");
    }

    #[test]
    fn test_render_line_with_url() {
        let config = RenderConfig::default();
        let rendered = render_entry(
            &HistoryEntry::line("Resume: https://example.com/x here"),
            &config,
        );
        // Adjacent text is untouched, the URL gets the OSC 8 wrapper
        assert!(rendered.starts_with("Resume: "));
        assert!(rendered.contains("\x1b]8;;https://example.com/x\x07"));
        assert!(rendered.ends_with(" here"));
    }

    #[test]
    fn test_render_banner_spans_lines() {
        let config = RenderConfig::default();
        let rendered = render_entry(&HistoryEntry::banner("aa\nbb\ncc"), &config);
        assert_eq!(count_lines(&rendered), 3);
    }

    #[test]
    fn test_render_screen_contains_everything() {
        let term = widget();
        let frame = render_screen(&term, &RenderConfig::default());
        assert!(frame.contains("hello"));
        assert!(frame.contains("=="));
        assert!(frame.contains("guest@termfolio"));
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("single"), 1);
        assert_eq!(count_lines("one\r\ntwo\r\nthree"), 3);
    }
}
