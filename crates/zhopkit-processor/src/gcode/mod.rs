//! G-Code z-hop engine
//!
//! This module provides:
//! - Line classification (tokenizing `G1` parameters, travel-move detection)
//! - Position tracking with sticky axes
//! - Travel run look-ahead
//! - Hop and descent synthesis
//! - The pipeline tying them together

pub mod classifier;
pub mod format;
pub mod grouper;
pub mod pipeline;
pub mod synthesizer;
pub mod tracker;

pub use classifier::*;
pub use grouper::*;
pub use pipeline::*;
pub use synthesizer::*;
pub use tracker::*;
