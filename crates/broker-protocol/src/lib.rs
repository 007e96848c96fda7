//! broker-protocol
//!
//! Wire-level encoding/decoding for the message broker.
//!
//! This crate is responsible for turning raw bracketed text
//! (`[topic][payload]`) into logical [`Frame`]s and back again.
//!
//! - [`frame`] : the bracketed text protocol (for multi-client TCP)

pub mod error;
pub mod frame;

pub use error::FrameError;
pub use frame::{decode, encode, Frame};
