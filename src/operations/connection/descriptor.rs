use std::fmt;

use super::direction::Direction;

/// Connection state of one relation member relative to its neighbours.
///
/// One descriptor is produced per member, at the same index. Non-way
/// members get [`ConnectionDescriptor::invalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConnectionDescriptor {
    pub direction: Direction,
    /// `false` for members that cannot take part in connectivity.
    pub valid: bool,
    /// Linked to the previous way member.
    pub link_prev: bool,
    /// Linked to the next way member.
    pub link_next: bool,
    /// Part of a group whose chain returns to its starting node.
    pub is_loop: bool,
    /// Outbound arc of a one-way constrained section.
    pub is_oneway_loop_forward_part: bool,
    /// Return arc of a one-way constrained section.
    pub is_oneway_loop_backward_part: bool,
    pub is_oneway_head: bool,
    pub is_oneway_tail: bool,
    /// The `oneway` tag agrees with the link to the previous way.
    pub oneway_follows_previous: bool,
    /// The `oneway` tag agrees with the link to the next way.
    pub oneway_follows_next: bool,
}

impl Default for ConnectionDescriptor {
    fn default() -> Self {
        Self {
            direction: Direction::None,
            valid: true,
            link_prev: false,
            link_next: false,
            is_loop: false,
            is_oneway_loop_forward_part: false,
            is_oneway_loop_backward_part: false,
            is_oneway_head: false,
            is_oneway_tail: false,
            oneway_follows_previous: true,
            oneway_follows_next: true,
        }
    }
}

impl ConnectionDescriptor {
    /// Descriptor for a member that does not take part in connectivity.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            valid: false,
            ..Self::default()
        }
    }
}

/// Compact label: `I` for invalid members, otherwise the flags
/// (`L`, `FP`, `BP`, `H`, `T`) followed by the direction, e.g. `LFPH FORWARD`.
impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return f.write_str("I");
        }
        let flags = [
            (self.is_loop, "L"),
            (self.is_oneway_loop_forward_part, "FP"),
            (self.is_oneway_loop_backward_part, "BP"),
            (self.is_oneway_head, "H"),
            (self.is_oneway_tail, "T"),
        ];
        let mut any = false;
        for (set, label) in flags {
            if set {
                f.write_str(label)?;
                any = true;
            }
        }
        if any {
            f.write_str(" ")?;
        }
        write!(f, "{}", self.direction)
    }
}
