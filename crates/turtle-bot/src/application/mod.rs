//! Application layer use cases for the robot-side service.
//!
//! - **`execute_command`** – Translates decoded wire commands into physical
//!   actuator motions via the calibration table. The actual hardware call is
//!   made by an [`execute_command::ActuatorBank`] implementation that is
//!   injected at construction time, and the status display behind
//!   [`execute_command::StatusSink`] is updated before every dispatch.

pub mod execute_command;
