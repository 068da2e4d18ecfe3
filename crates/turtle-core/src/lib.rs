//! # turtle-core
//!
//! Shared library for Turtle-Over-IP containing the binary command codec and
//! the calibration domain logic.
//!
//! This crate is used by the robot-side service and by any future controller
//! tooling. It has zero dependencies on OS APIs, display hardware, or network
//! sockets; the codec is written against [`tokio::io::AsyncRead`] so it works
//! on a TCP stream, a serial link, or an in-memory buffer alike.
//!
//! # Architecture overview (for beginners)
//!
//! Turtle-Over-IP is a remote-controlled drawing robot ("turtle"). A
//! controller program connects to the robot over a point-to-point link and
//! streams movement instructions; the robot executes them one at a time with
//! its three actuators (drive wheels, steering, pen lift).
//!
//! This crate (`turtle-core`) is the shared foundation. It defines:
//!
//! - **`protocol`** – How bytes travel over the link. Each instruction is a
//!   fixed-width binary frame (a 4-byte opcode, optionally followed by a
//!   4-byte argument) that decodes into a typed [`Command`].
//!
//! - **`domain`** – Pure business logic with no I/O. The central piece is
//!   [`Calibration`]: the build-time constants that scale a command's logical
//!   units (steps, angle units) into physical actuator rotations.

// Declare the two top-level modules. Rust will look for each in a
// subdirectory with the same name (e.g., src/protocol/mod.rs).
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `turtle_core::Command` instead of `turtle_core::protocol::command::Command`.
pub use domain::calibration::{Actuator, Calibration, Motion};
pub use protocol::codec::{decode_next, DecodeError, Frame};
pub use protocol::command::Command;
