//! Typed commands of the turtle wire protocol.
//!
//! Wire format (receive-direction only; the robot never writes back):
//! ```text
//! [opcode:i32 big-endian][argument:i32 big-endian]   for opcodes 1-4
//! [opcode:i32 big-endian]                            for opcodes 0, 5, 6
//! ```
//!
//! The `distance` and `angle` arguments are *logical units*: abstract counts
//! that the [`crate::domain::calibration::Calibration`] constants scale into
//! physical actuator rotations.

use std::fmt;

/// Numeric opcodes exactly as they appear on the wire.
pub mod opcode {
    /// Terminate the session and shut the service down.
    pub const QUIT: i32 = 0;
    /// Drive forward; carries a distance argument.
    pub const FORWARD: i32 = 1;
    /// Drive backward; carries a distance argument.
    pub const BACKWARD: i32 = 2;
    /// Turn left in place; carries an angle argument.
    pub const TURN_LEFT: i32 = 3;
    /// Turn right in place; carries an angle argument.
    pub const TURN_RIGHT: i32 = 4;
    /// Lift the pen off the paper.
    pub const PEN_UP: i32 = 5;
    /// Drop the pen onto the paper.
    pub const PEN_DOWN: i32 = 6;
}

/// One decoded movement instruction.
///
/// Commands are single-use: decoded from the stream, dispatched to the
/// actuators, and discarded. They carry logical units, not physical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// End the session and stop serving; the only process-terminating input.
    Quit,
    /// Drive forward by the given number of distance steps.
    Forward(i32),
    /// Drive backward by the given number of distance steps.
    Backward(i32),
    /// Turn left by the given number of angle units.
    TurnLeft(i32),
    /// Turn right by the given number of angle units.
    TurnRight(i32),
    /// Lift the pen.
    PenUp,
    /// Drop the pen.
    PenDown,
}

/// Renders the human-readable status label shown on the robot's display:
/// `"Forward 3"` for argument-carrying commands, the bare label otherwise.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Quit => write!(f, "Quit"),
            Command::Forward(d) => write!(f, "Forward {d}"),
            Command::Backward(d) => write!(f, "Backward {d}"),
            Command::TurnLeft(a) => write!(f, "TurnLeft {a}"),
            Command::TurnRight(a) => write!(f, "TurnRight {a}"),
            Command::PenUp => write!(f, "PenUp"),
            Command::PenDown => write!(f, "PenDown"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
