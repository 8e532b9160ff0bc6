use super::tags::Tags;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a node in the data set.
    pub struct NodeId;
}

/// Data associated with a node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Planar position of the node.
    pub coord: Point2,
    /// Tags of the node.
    pub tags: Tags,
}

impl NodeData {
    /// Creates an untagged node at the given position.
    #[must_use]
    pub fn new(coord: Point2) -> Self {
        Self {
            coord,
            tags: Tags::new(),
        }
    }

    /// Adds a tag, replacing any previous value for `key`.
    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }
}
