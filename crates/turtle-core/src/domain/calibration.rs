//! Calibration constants and the command-to-motion dispatch table.
//!
//! A command argument is a count of *logical units* (distance steps, angle
//! units). [`Calibration`] holds the build-time constants that scale those
//! counts into physical actuator rotations, and [`Calibration::motion_for`]
//! is the single place where that scaling happens.

use crate::protocol::command::Command;

/// One of the three independently addressable physical outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actuator {
    /// The drive motor moving the turtle forward and backward.
    Drive,
    /// The steering motor turning the turtle in place.
    Steer,
    /// The pen-lift motor.
    Pen,
}

/// A physical order for one actuator: set `speed`, then rotate by `rotation`
/// relative units. The sign of `rotation` selects the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub actuator: Actuator,
    pub speed: i32,
    pub rotation: i32,
}

/// Process-wide calibration constants.
///
/// Constructed once at startup and shared read-only by every dispatch; the
/// values are fixed at build time and never change while the service runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    /// Drive motor speed for Forward/Backward.
    pub move_speed: i32,
    /// Physical drive rotation units per logical distance step.
    pub move_step: i32,
    /// Steering motor speed for TurnLeft/TurnRight.
    pub turn_speed: i32,
    /// Physical steering degrees per logical angle unit (fractional).
    pub turn_step: f32,
    /// Pen-lift motor speed.
    pub pencil_speed: i32,
    /// Physical pen-lift rotation units for one full pen stroke.
    pub pencil_step: i32,
}

/// The constants the physical rig was calibrated with.
impl Default for Calibration {
    fn default() -> Self {
        Self {
            move_speed: 100,
            move_step: 30,
            turn_speed: 100,
            turn_step: 4.2,
            pencil_speed: 100,
            pencil_step: 100,
        }
    }
}

impl Calibration {
    /// Computes the physical motion for `command`.
    ///
    /// Returns `None` for [`Command::Quit`], which controls the session
    /// lifecycle and drives no actuator.
    ///
    /// Arguments arrive off the wire unvalidated and may span the full i32
    /// range; the scaling arithmetic wraps on overflow so no controller
    /// input can panic the control loop.
    pub fn motion_for(&self, command: &Command) -> Option<Motion> {
        let motion = match command {
            Command::Quit => return None,
            Command::Forward(d) => Motion {
                actuator: Actuator::Drive,
                speed: self.move_speed,
                rotation: self.move_step.wrapping_mul(*d),
            },
            Command::Backward(d) => Motion {
                actuator: Actuator::Drive,
                speed: self.move_speed,
                rotation: self.move_step.wrapping_mul(*d).wrapping_neg(),
            },
            Command::TurnLeft(a) => Motion {
                actuator: Actuator::Steer,
                speed: self.turn_speed,
                rotation: self.turn_degrees(*a).wrapping_neg(),
            },
            Command::TurnRight(a) => Motion {
                actuator: Actuator::Steer,
                speed: self.turn_speed,
                rotation: self.turn_degrees(*a),
            },
            // The pen lifts half a step but drops a full one. The physical
            // rig is calibrated around this asymmetry; do not even it out.
            Command::PenUp => Motion {
                actuator: Actuator::Pen,
                speed: self.pencil_speed,
                rotation: self.pencil_step / 2,
            },
            Command::PenDown => Motion {
                actuator: Actuator::Pen,
                speed: self.pencil_speed,
                rotation: -self.pencil_step,
            },
        };
        Some(motion)
    }

    /// Scales an angle-unit count to whole steering degrees, rounding half
    /// away from zero and saturating at the i32 bounds.
    fn turn_degrees(&self, angle: i32) -> i32 {
        (self.turn_step * angle as f32).round() as i32
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
