//! ExecuteCommandUseCase: translates decoded commands into actuator motions.
//!
//! This use case sits at the application layer and delegates to an
//! [`ActuatorBank`] trait object for the hardware call. The motor-driver
//! implementations live in the infrastructure layer; tests and the default
//! build use the recording mock there.

use std::sync::Arc;

use thiserror::Error;
use turtle_core::{Actuator, Calibration, Command};

/// A hardware-level failure raised by the motor controller.
///
/// The contract is all-or-nothing: an actuate call either succeeds or fails
/// fatally for the session. There is no retry at this layer; the fault
/// propagates up and ends the session, and the service loop recovers.
#[derive(Debug, Error)]
#[error("actuator fault on {actuator:?}: {reason}")]
pub struct ActuatorFault {
    pub actuator: Actuator,
    pub reason: String,
}

/// Uniform control surface over the three physical actuators.
///
/// `actuate` sets the named actuator's speed, then commands a relative
/// rotation; the sign of `rotation` selects the direction. The call blocks
/// only until the hardware has accepted the command (fire-and-continue);
/// the physical motion itself is not awaited.
pub trait ActuatorBank: Send + Sync {
    /// Issues one motion order to the named actuator.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorFault`] on a hardware-level failure, which the
    /// caller must treat as session-ending.
    fn actuate(&self, actuator: Actuator, speed: i32, rotation: i32) -> Result<(), ActuatorFault>;
}

/// Single-line textual status reporter.
///
/// Each report replaces the previously shown line. Reporting is best-effort
/// and never fails observably; device errors are swallowed by the
/// implementation.
pub trait StatusSink: Send + Sync {
    /// Replaces the status line with `text`.
    fn report(&self, text: &str);
}

/// The Execute Command use case.
///
/// Receives decoded wire commands, looks up their physical motion in the
/// calibration table, reports the command on the status display, and
/// dispatches the motion to the actuator bank.
pub struct ExecuteCommandUseCase {
    actuators: Arc<dyn ActuatorBank>,
    status: Arc<dyn StatusSink>,
    calibration: Calibration,
}

impl ExecuteCommandUseCase {
    /// Creates a new use case with the given actuator bank, status sink, and
    /// calibration constants. The calibration is immutable from here on.
    pub fn new(
        actuators: Arc<dyn ActuatorBank>,
        status: Arc<dyn StatusSink>,
        calibration: Calibration,
    ) -> Self {
        Self {
            actuators,
            status,
            calibration,
        }
    }

    /// Executes one command: status update first, then the actuator call.
    ///
    /// Commands with no physical motion (`Quit`, which the session layer
    /// normally intercepts before this point) are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorFault`] if the hardware call fails.
    pub fn execute(&self, command: &Command) -> Result<(), ActuatorFault> {
        let Some(motion) = self.calibration.motion_for(command) else {
            return Ok(());
        };
        self.status.report(&command.to_string());
        self.actuators
            .actuate(motion.actuator, motion.speed, motion.rotation)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::actuators::mock::MockActuatorBank;
    use crate::infrastructure::status::mock::MockStatusSink;

    fn make_use_case() -> (ExecuteCommandUseCase, Arc<MockActuatorBank>, Arc<MockStatusSink>) {
        let bank = Arc::new(MockActuatorBank::new());
        let status = Arc::new(MockStatusSink::new());
        let uc = ExecuteCommandUseCase::new(
            Arc::clone(&bank) as Arc<dyn ActuatorBank>,
            Arc::clone(&status) as Arc<dyn StatusSink>,
            Calibration::default(),
        );
        (uc, bank, status)
    }

    #[test]
    fn test_forward_drives_the_drive_actuator() {
        // Arrange
        let (uc, bank, _status) = make_use_case();

        // Act
        uc.execute(&Command::Forward(3)).unwrap();

        // Assert
        assert_eq!(*bank.calls.lock().unwrap(), vec![(Actuator::Drive, 100, 90)]);
    }

    #[test]
    fn test_status_is_reported_before_dispatch() {
        let (uc, _bank, status) = make_use_case();

        uc.execute(&Command::TurnRight(90)).unwrap();

        assert_eq!(*status.reports.lock().unwrap(), vec!["TurnRight 90".to_string()]);
    }

    #[test]
    fn test_pen_commands_reproduce_the_calibration_asymmetry() {
        let (uc, bank, _status) = make_use_case();

        uc.execute(&Command::PenUp).unwrap();
        uc.execute(&Command::PenDown).unwrap();

        let calls = bank.calls.lock().unwrap();
        assert_eq!(calls[0], (Actuator::Pen, 100, 50));
        assert_eq!(calls[1], (Actuator::Pen, 100, -100));
    }

    #[test]
    fn test_quit_touches_neither_actuators_nor_status() {
        let (uc, bank, status) = make_use_case();

        uc.execute(&Command::Quit).unwrap();

        assert!(bank.calls.lock().unwrap().is_empty());
        assert!(status.reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_actuator_fault_propagates_to_the_caller() {
        // Arrange - a bank wired to fail every call
        let bank = Arc::new(MockActuatorBank::failing());
        let status = Arc::new(MockStatusSink::new());
        let uc = ExecuteCommandUseCase::new(
            Arc::clone(&bank) as Arc<dyn ActuatorBank>,
            Arc::clone(&status) as Arc<dyn StatusSink>,
            Calibration::default(),
        );

        // Act
        let result = uc.execute(&Command::Forward(1));

        // Assert - the fault reaches the caller, after the status update
        assert!(result.is_err());
        assert_eq!(status.reports.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_argument_sign_flows_through_to_rotation() {
        let (uc, bank, _status) = make_use_case();

        uc.execute(&Command::Backward(2)).unwrap();
        uc.execute(&Command::TurnLeft(45)).unwrap();

        let calls = bank.calls.lock().unwrap();
        assert_eq!(calls[0], (Actuator::Drive, 100, -60));
        assert_eq!(calls[1], (Actuator::Steer, 100, -189));
    }
}
