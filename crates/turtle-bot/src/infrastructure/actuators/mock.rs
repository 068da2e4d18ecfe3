//! Mock actuator bank for unit and integration testing.
//!
//! # Why a mock bank?
//!
//! The real actuator bank talks to motor-controller hardware that:
//!
//! - Requires the physical robot to be attached.
//! - Actually spins motors and moves the pen on the test bench.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockActuatorBank` replaces the hardware call with in-memory
//! recording. Each motion order is pushed into a `Mutex<Vec<...>>` so test
//! assertions can inspect exactly what was commanded and in what order.
//!
//! # `should_fail` flag
//!
//! A bank built with [`MockActuatorBank::failing`] returns an
//! `ActuatorFault` from every call. This exercises the session-ending
//! hardware-fault path without needing a broken rig.

use std::sync::Mutex;

use turtle_core::Actuator;

use crate::application::execute_command::{ActuatorBank, ActuatorFault};

/// A mock bank that records all motion orders without touching hardware.
///
/// The call log lives in a `Mutex<Vec<...>>` so tests can safely share the
/// bank across threads (e.g., when wrapping it in an `Arc`).
#[derive(Default)]
pub struct MockActuatorBank {
    /// Records each (actuator, speed, rotation) triple passed to `actuate`.
    pub calls: Mutex<Vec<(Actuator, i32, i32)>>,
    /// When `true`, every call immediately returns an [`ActuatorFault`].
    pub should_fail: bool,
}

impl MockActuatorBank {
    /// Creates a bank with an empty call log that accepts every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank whose every call reports a hardware fault.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }
}

impl ActuatorBank for MockActuatorBank {
    /// Records the motion order, or reports a fault if `should_fail` is set.
    fn actuate(&self, actuator: Actuator, speed: i32, rotation: i32) -> Result<(), ActuatorFault> {
        if self.should_fail {
            return Err(ActuatorFault {
                actuator,
                reason: "mock failure".into(),
            });
        }
        self.calls.lock().unwrap().push((actuator, speed, rotation));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
