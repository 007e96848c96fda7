//! Error types for the wire codec.

use thiserror::Error;

/// Errors produced while decoding a bracketed message.
///
/// Encoding never fails, so there is no encode variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The input did not contain at least two bracket groups.
    ///
    /// Carries the offending raw text so the sender can see exactly
    /// what was rejected.
    #[error("unexpected message format: {0}")]
    Malformed(String),
}
