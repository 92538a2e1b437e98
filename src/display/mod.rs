//! Display layer for terminal output
//!
//! Separates the widget's data from formatting. The renderer turns the
//! visible scrollback suffix and the input line into one ANSI frame string;
//! styles holds the semantic formatting helpers.

pub mod renderer;
pub mod styles;

pub use renderer::{count_lines, render_entry, render_screen, RenderConfig};
