//! turtle-bot library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does turtle-bot do? (for beginners)
//!
//! The *bot* runs on the robot itself. A controller program somewhere on the
//! network connects to it and streams binary movement commands: drive
//! forward, turn, lift or drop the pen. The bot executes each command on its
//! three actuators and shows the command it is working on via a one-line
//! status display.
//!
//! The service:
//!
//! 1. Waits (with no timeout) for a controller to connect.
//! 2. Reads fixed-width command frames off the link one at a time.
//! 3. Scales each command's logical units into a physical actuator motion
//!    using the build-time calibration constants.
//! 4. Dispatches the motion to the actuator bank and updates the status line.
//! 5. On a Quit command, shuts down cleanly. On any link or hardware
//!    failure, shows an interruption notice, pauses briefly, and goes back
//!    to waiting for the next controller.
//!
//! Exactly one link is active at a time; commands are strictly sequential
//! with one in-flight command, never queued.

/// Application layer: the command-execution use case and its actuation traits.
pub mod application;

/// Infrastructure layer: actuator adapters, status display, and network I/O.
pub mod infrastructure;
