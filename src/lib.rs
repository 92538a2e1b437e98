//! termfolio - terminal-styled personal portfolio
//!
//! This library provides the terminal emulator widget: a bounded scrollback
//! of history entries, a line editor, and a fixed command vocabulary with
//! canned responses. The binary in `main.rs` hosts the widget in a raw-mode
//! crossterm session.

pub mod commands;
pub mod config;
pub mod display;
pub mod history;
pub mod input;
pub mod linkify;
pub mod terminal;
