//! Turtle-Over-IP robot service entry point.
//!
//! Wires together the actuator bank, the status display, the calibration
//! constants, and the TCP command service, then serves until a controller
//! sends Quit.
//!
//! ```text
//! main()
//!  └─ TurtleService::bind()  -- listener on the command port
//!  └─ TurtleService::run()   -- accept -> session -> recover/shutdown
//!       └─ Session           -- decode frames, dispatch commands
//!            └─ ExecuteCommandUseCase -> ActuatorBank / StatusSink
//! ```
//!
//! # Actuator bank
//!
//! The `MockActuatorBank` used here records motion orders rather than
//! driving motors. A deployment on the physical robot swaps in the real
//! motor-controller driver behind the same `ActuatorBank` trait; nothing
//! else changes.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use turtle_bot::application::execute_command::{ExecuteCommandUseCase, StatusSink};
use turtle_bot::infrastructure::{
    actuators::mock::MockActuatorBank,
    network::{ServiceConfig, TurtleService},
    status::ConsoleStatusSink,
};
use turtle_core::Calibration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Turtle-Over-IP service starting");

    // Stand-in motor driver; the physical rig provides the real one.
    let actuators = Arc::new(MockActuatorBank::new());
    let status: Arc<dyn StatusSink> = Arc::new(ConsoleStatusSink::new());

    let executor = ExecuteCommandUseCase::new(
        actuators,
        Arc::clone(&status),
        Calibration::default(),
    );

    let service = TurtleService::bind(ServiceConfig::default(), executor, status).await?;
    service.run().await?;

    info!("Turtle-Over-IP service stopped");
    Ok(())
}
