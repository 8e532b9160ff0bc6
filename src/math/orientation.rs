use super::{Point2, TOLERANCE};

/// Sense of rotation of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Computes the turn `a -> b -> c` as the z-component of the cross product
/// of `b - a` and `c - b`.
///
/// Positive for a left (counter-clockwise) turn, negative for a right turn.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).perp(&(c - b))
}

/// Classifies the rotation of a ring from its first three points.
///
/// Collinear points count as counter-clockwise, so the result is always
/// defined for three distinct inputs.
#[must_use]
pub fn rotation_of(a: &Point2, b: &Point2, c: &Point2) -> Rotation {
    if turn(a, b, c) < -TOLERANCE {
        Rotation::Clockwise
    } else {
        Rotation::CounterClockwise
    }
}
