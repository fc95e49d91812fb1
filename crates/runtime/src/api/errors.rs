//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and resolver wiring so clients
//! can bubble them up with consistent context. Gameplay misses are reported
//! in outcomes, never as errors.
use herbalism_core::{ActorId, HerbalismError, Location, OracleError};
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("harvest worker command channel closed")]
    CommandChannelClosed,

    #[error("harvest worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("harvest worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error("nothing to harvest at {0}")]
    EmptyCell(Location),

    #[error("resolver failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("invalid herbalism configuration: {0}")]
    Config(#[from] herbalism_core::ConfigError),
}

impl RuntimeError {
    /// Stable code for logging and client-side matching.
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            RuntimeError::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            RuntimeError::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            RuntimeError::UnknownActor(_) => "RUNTIME_UNKNOWN_ACTOR",
            RuntimeError::EmptyCell(_) => "RUNTIME_EMPTY_CELL",
            RuntimeError::Oracle(err) => err.error_code(),
            RuntimeError::Config(err) => err.error_code(),
        }
    }
}
