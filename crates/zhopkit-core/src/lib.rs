//! # ZHopKit Core
//!
//! Core types and error handling shared by the ZHopKit crates.
//! Provides the position model used while tracking a G-code stream and
//! the error types surfaced by parsing and processing.

pub mod data;
pub mod error;

pub use data::{PartialPosition, Position};
pub use error::{Error, GcodeError, Result};
