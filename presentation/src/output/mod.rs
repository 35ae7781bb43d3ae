//! Output formatting for one-shot submissions

pub mod console;

pub use console::ConsoleFormatter;
