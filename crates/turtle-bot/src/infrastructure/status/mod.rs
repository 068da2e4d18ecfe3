//! Status display implementations.
//!
//! The robot shows one line of text describing what it is doing: the command
//! in flight, a waiting notice, or an interruption notice. Each report
//! replaces the previous line, mirroring a single-line hardware display.

pub mod console;
pub mod mock;

pub use console::ConsoleStatusSink;
pub use mock::MockStatusSink;
