//! Infrastructure layer for the robot-side service.
//!
//! Contains the hardware- and OS-facing adapters: the actuator bank, the
//! status display, and the TCP network service.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `turtle_core`, but MUST NOT be imported by the application or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`actuators`** – Implementations of `ActuatorBank`. The real motor
//!   driver is hardware-specific; the recording mock provided here stands in
//!   for it everywhere a physical rig is not attached.
//!
//! - **`status`** – Implementations of `StatusSink`: a console sink that
//!   overwrites a single terminal line, and a recording mock for tests.
//!
//! - **`network`** – The TCP service: accepts one controller connection at a
//!   time, runs a session that decodes and dispatches command frames, and
//!   recovers from link failures without exiting.

pub mod actuators;
pub mod network;
pub mod status;
