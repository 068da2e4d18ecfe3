//! Actuator bank implementations.
//!
//! The real motor controller is board-specific firmware glue and lives out
//! of tree; every in-tree consumer (tests, the default binary) uses the
//! recording mock behind the same `ActuatorBank` trait.

pub mod mock;
