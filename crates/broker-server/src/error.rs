//! Dispatch-level error taxonomy.
//!
//! Transport errors are not represented here: a failed read or write
//! is an `io::Error` handled directly in the client loop, and it is
//! the only error class that terminates a session. Everything below
//! is serialized back to the originating connection as plain text and
//! the session survives.

use broker_core::GameError;
use broker_protocol::FrameError;
use thiserror::Error;

/// A failure inside a topic handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The payload did not have the shape this handler expects.
    #[error("bad payload: {0}")]
    BadPayload(String),

    /// A rejected game operation.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A failed dispatch of one inbound frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The raw text was not a well-formed bracketed message.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// No handler is registered for the frame's topic.
    #[error("topic not accepted: {0}")]
    TopicNotFound(String),

    /// The handler itself failed; the topic is carried for
    /// diagnosability.
    #[error("error handling {topic}: {source}")]
    Handler {
        topic: String,
        source: HandlerError,
    },
}
