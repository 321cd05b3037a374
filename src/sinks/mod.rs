//! Sink implementations

pub mod console;

pub use console::ConsoleSink;
