//! # ZHopKit Processor
//!
//! Travel-move detection, run grouping and z-hop synthesis for slicer
//! G-code, plus the file I/O used to rewrite a G-code file in place.

pub mod gcode;
pub mod utils;

pub use gcode::{
    classifier::{is_hop_candidate, is_synthesized, is_travel_move, parse_motion, MotionParams},
    format::format_coordinate,
    grouper::{open_run, TravelRun},
    pipeline::{HopPipeline, ProcessingStats},
    synthesizer::{interpolate, HopSynthesizer, SynthesizedMove},
    tracker::{MotionSnapshot, PositionTracker},
};

pub use utils::file_io::{GcodeFileReader, GcodeFileWriter};
