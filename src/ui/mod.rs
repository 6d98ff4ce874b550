//! User Interface module
//!
//! Plain console output with crossterm colors.

pub mod console;

pub use console::Console;
