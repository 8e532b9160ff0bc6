use std::collections::BTreeMap;

/// Key/value tags attached to a primitive.
pub type Tags = BTreeMap<String, String>;

/// Returns `true` if `key` is present and its value is one of `values`.
#[must_use]
pub fn has_tag(tags: &Tags, key: &str, values: &[&str]) -> bool {
    tags.get(key).is_some_and(|v| values.contains(&v.as_str()))
}

/// Travel restriction derived from a way's `oneway` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Oneway {
    /// Untagged, `no`, `false`, `0` or any unrecognised value.
    #[default]
    Bidirectional,
    /// `yes`, `true` or `1`: travel follows the stored node order.
    Forward,
    /// `-1` or `reverse`: travel runs against the stored node order.
    Backward,
}

impl Oneway {
    /// Parses the value of a `oneway` tag.
    #[must_use]
    pub fn from_tag(value: Option<&str>) -> Self {
        match value {
            Some("yes" | "true" | "1") => Self::Forward,
            Some("-1" | "reverse") => Self::Backward,
            _ => Self::Bidirectional,
        }
    }

    /// Returns `true` unless the way can be travelled both ways.
    #[must_use]
    pub fn is_oneway(self) -> bool {
        self != Self::Bidirectional
    }
}
