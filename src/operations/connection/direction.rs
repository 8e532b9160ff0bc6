use std::fmt;

use crate::math::orientation::Rotation;

/// How a way member is traversed relative to its stored node order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// No connection to the previous member could be established.
    #[default]
    None,
    /// Traversed in stored node order.
    Forward,
    /// Traversed against stored node order.
    Backward,
    /// A clockwise roundabout; it attaches at any of its nodes.
    RoundaboutClockwise,
    /// A counter-clockwise roundabout; it attaches at any of its nodes.
    RoundaboutCounterClockwise,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::RoundaboutClockwise => Self::RoundaboutCounterClockwise,
            Self::RoundaboutCounterClockwise => Self::RoundaboutClockwise,
            Self::None => Self::None,
        }
    }

    /// Returns `true` for the two roundabout directions.
    #[must_use]
    pub fn is_roundabout(self) -> bool {
        matches!(
            self,
            Self::RoundaboutClockwise | Self::RoundaboutCounterClockwise
        )
    }
}

impl From<Rotation> for Direction {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => Self::RoundaboutClockwise,
            Rotation::CounterClockwise => Self::RoundaboutCounterClockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "NONE",
            Self::Forward => "FORWARD",
            Self::Backward => "BACKWARD",
            Self::RoundaboutClockwise => "ROUNDABOUT_CW",
            Self::RoundaboutCounterClockwise => "ROUNDABOUT_CCW",
        };
        f.write_str(label)
    }
}
