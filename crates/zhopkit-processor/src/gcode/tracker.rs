//! Running machine position
//!
//! Every `G1` line moves the current target into `previous` before its own
//! words are applied, whether or not the line is a travel move. Axes and the
//! feedrate the line does not mention keep their values.

use zhopkit_core::Position;

use super::MotionParams;

/// Feedrate assumed before any F word is seen
pub const INITIAL_FEED_RATE: u64 = 1;

/// Motion state after a line has been applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    pub prev_x: f64,
    pub prev_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub current_z: f64,
    pub feed_rate: u64,
}

impl MotionSnapshot {
    /// Start of the XY move, at the current Z
    pub fn previous(&self) -> Position {
        Position::new(self.prev_x, self.prev_y, self.current_z)
    }

    /// End of the XY move, at the current Z
    pub fn target(&self) -> Position {
        Position::new(self.target_x, self.target_y, self.current_z)
    }

    /// XY length of the move
    pub fn travel_distance(&self) -> f64 {
        self.previous().distance_xy(&self.target())
    }
}

/// Sticky X/Y/Z/F state for one pass over a file
#[derive(Debug, Clone)]
pub struct PositionTracker {
    previous_x: f64,
    previous_y: f64,
    position: Position,
    feed_rate: u64,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTracker {
    /// Tracker at the origin with the initial feedrate
    pub fn new() -> Self {
        Self {
            previous_x: 0.0,
            previous_y: 0.0,
            position: Position::default(),
            feed_rate: INITIAL_FEED_RATE,
        }
    }

    /// Apply the words of a `G1` line and return the resulting state
    pub fn update(&mut self, params: &MotionParams) -> MotionSnapshot {
        self.previous_x = self.position.x;
        self.previous_y = self.position.y;

        self.position.apply(&params.position);
        if let Some(feed_rate) = params.feed_rate {
            self.feed_rate = feed_rate;
        }

        self.snapshot()
    }

    /// Current state without applying anything
    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            prev_x: self.previous_x,
            prev_y: self.previous_y,
            target_x: self.position.x,
            target_y: self.position.y,
            current_z: self.position.z,
            feed_rate: self.feed_rate,
        }
    }

    /// Current target position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current feedrate
    pub fn feed_rate(&self) -> u64 {
        self.feed_rate
    }
}
