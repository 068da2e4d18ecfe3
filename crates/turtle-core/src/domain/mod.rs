//! Domain logic for Turtle-Over-IP.
//!
//! This module contains pure business logic with no I/O dependencies: the
//! calibration constants and the table that maps a logical command onto a
//! physical actuator motion. It can be compiled and tested anywhere, with no
//! robot attached.

/// Calibration constants and the command-to-motion dispatch table.
///
/// See [`calibration::Calibration`] for the main type.
pub mod calibration;
