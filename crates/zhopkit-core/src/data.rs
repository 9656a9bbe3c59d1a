//! Position types
//!
//! `Position` is a fully specified machine position, `PartialPosition`
//! carries only the axes a single command mentions.

/// Machine position in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Position {
    /// Create a new position with X, Y, Z coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other` in the XY plane
    pub fn distance_xy(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point a fraction `t` of the way from `self` towards `other` in XY.
    ///
    /// The Z of the result is taken from `self`.
    pub fn lerp_xy(&self, other: &Position, t: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z,
        }
    }

    /// Overwrite only the axes present in `update`
    pub fn apply(&mut self, update: &PartialPosition) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(z) = update.z {
            self.z = z;
        }
    }
}

/// Partial position update (only the axes a command specifies)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialPosition {
    /// X-axis position (if Some, update this axis)
    pub x: Option<f64>,
    /// Y-axis position (if Some, update this axis)
    pub y: Option<f64>,
    /// Z-axis position (if Some, update this axis)
    pub z: Option<f64>,
}
