//! TCP network service for the robot.
//!
//! Implements the top-level service state machine and the per-connection
//! session:
//!
//! - [`TurtleService`] owns the listener and serves exactly one controller
//!   at a time: block on accept (no timeout), run the session to completion,
//!   then either shut down (Quit) or pause briefly and accept again (link or
//!   hardware failure). No task is spawned per session; the whole service is
//!   one logical thread of control.
//! - [`Session`] exclusively owns the accepted stream for its lifetime and
//!   feeds it to the command codec, dispatching each decoded frame. The
//!   stream closes on every exit path when the session drops; close failures
//!   are swallowed.
//!
//! Data flows one direction only. The service never writes a byte back on
//! the link, and a silent peer blocks it forever by design.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncRead;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info, warn};
use turtle_core::{decode_next, Command, Frame};
use uuid::Uuid;

use crate::application::execute_command::{ExecuteCommandUseCase, StatusSink};

/// Status line shown while waiting for a controller to attach.
pub const WAITING_NOTICE: &str = "CONNECTION...";
/// Status line shown when a session ends on a link or hardware failure.
pub const INTERRUPTION_NOTICE: &str = "INTERRUPTION!";

/// Error type for the network service.
///
/// Only startup can fail hard; everything that happens after a successful
/// bind is absorbed by the recovery loop.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("bind failed on {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for the network service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the command listener binds to.
    pub bind_addr: SocketAddr,
    /// Pause before re-entering the accept state after an interrupted
    /// session.
    pub recovery_delay: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:35288".parse().unwrap(),
            recovery_delay: Duration::from_secs(1),
        }
    }
}

/// Lifecycle states of the service loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Constructed but not yet running.
    Idle,
    /// Blocked on accepting a new inbound connection.
    AwaitingConnection,
    /// Running a session on the one active connection.
    Serving,
    /// A Quit command was honoured; no further connections are accepted.
    ShuttingDown,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A Quit command was decoded; the service shuts down.
    Terminated,
    /// The link failed, the stream ended, or an actuator faulted; the
    /// service recovers and accepts a new connection.
    Ended,
}

/// One accepted connection.
///
/// Owns the byte stream exclusively for its lifetime. Generic over the
/// stream type so unit tests can drive it with in-memory readers; the
/// service always instantiates it with a `TcpStream`.
pub struct Session<S> {
    id: Uuid,
    peer: SocketAddr,
    stream: S,
}

impl<S> Session<S>
where
    S: AsyncRead + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr) -> Self {
        Self {
            id: Uuid::new_v4(),
            peer,
            stream,
        }
    }

    /// Reads and dispatches frames until the session ends.
    ///
    /// Returns [`SessionOutcome::Terminated`] when a Quit command is
    /// decoded, [`SessionOutcome::Ended`] on end-of-stream, a link read
    /// error, or an actuator fault. Consumes the session, so the stream is
    /// closed on every return path.
    pub async fn run(mut self, executor: &ExecuteCommandUseCase) -> SessionOutcome {
        info!(session = %self.id, peer = %self.peer, "session started");

        loop {
            match decode_next(&mut self.stream).await {
                Ok(Frame::Command(Command::Quit)) => {
                    info!(session = %self.id, "quit received; terminating");
                    return SessionOutcome::Terminated;
                }
                Ok(Frame::Command(command)) => {
                    debug!(session = %self.id, %command, "dispatching");
                    if let Err(fault) = executor.execute(&command) {
                        warn!(session = %self.id, %fault, "actuator fault; ending session");
                        return SessionOutcome::Ended;
                    }
                }
                Ok(Frame::Unknown(op)) => {
                    // Silent pass-through per the wire contract. Logged so a
                    // desynchronised peer (wrong endianness, framing drift)
                    // is still diagnosable from the operational log.
                    debug!(session = %self.id, opcode = op, "ignoring unknown opcode");
                }
                Err(e) => {
                    info!(session = %self.id, error = %e, "link read ended the session");
                    return SessionOutcome::Ended;
                }
            }
        }
    }
}

/// The robot-side command service.
///
/// Serves controllers strictly sequentially: one accepted connection at a
/// time, one command fully dispatched before the next byte is read.
pub struct TurtleService {
    config: ServiceConfig,
    listener: TcpListener,
    executor: ExecuteCommandUseCase,
    status: Arc<dyn StatusSink>,
    // run() consumes the service, so state transitions are published on a
    // watch channel; handles from state_watch() stay valid afterwards.
    state: watch::Sender<ServiceState>,
}

impl TurtleService {
    /// Binds the command listener and returns the service, ready to run.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BindFailed`] if the listener cannot bind.
    pub async fn bind(
        config: ServiceConfig,
        executor: ExecuteCommandUseCase,
        status: Arc<dyn StatusSink>,
    ) -> Result<Self, ServiceError> {
        let listener = TcpListener::bind(config.bind_addr)
            .await
            .map_err(|source| ServiceError::BindFailed {
                addr: config.bind_addr,
                source,
            })?;
        let (state, _) = watch::channel(ServiceState::Idle);
        Ok(Self {
            config,
            listener,
            executor,
            status,
            state,
        })
    }

    /// The address the listener actually bound, useful when the configured
    /// port was 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.local_addr().ok()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServiceState {
        *self.state.borrow()
    }

    /// Returns a handle that observes lifecycle state transitions, including
    /// those published after [`TurtleService::run`] has consumed the
    /// service. The handle retains the last published state once the
    /// service is gone.
    pub fn state_watch(&self) -> watch::Receiver<ServiceState> {
        self.state.subscribe()
    }

    /// Runs the service until a Quit command arrives.
    ///
    /// The accept call blocks indefinitely; the only exits are a Quit
    /// command (clean shutdown, `Ok`) or nothing at all. Accept failures are
    /// fatal only to that attempt: the loop logs them and re-enters the
    /// accept state.
    pub async fn run(mut self) -> Result<(), ServiceError> {
        let addr = self.local_addr();
        info!(addr = ?addr, "turtle service listening");

        loop {
            self.state.send_replace(ServiceState::AwaitingConnection);
            self.status.report(WAITING_NOTICE);

            let (stream, peer) = match self.listener.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    warn!(error = %e, "accept failed; re-entering accept state");
                    continue;
                }
            };

            self.state.send_replace(ServiceState::Serving);
            let session = Session::new(stream, peer);
            match session.run(&self.executor).await {
                SessionOutcome::Terminated => {
                    self.state.send_replace(ServiceState::ShuttingDown);
                    info!("shutting down");
                    return Ok(());
                }
                SessionOutcome::Ended => {
                    self.status.report(INTERRUPTION_NOTICE);
                    time::sleep(self.config.recovery_delay).await;
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
