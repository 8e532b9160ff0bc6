use super::node::NodeId;
use super::tags::{Oneway, Tags};

slotmap::new_key_type! {
    /// Unique identifier for a way in the data set.
    pub struct WayId;
}

/// Data associated with a way.
///
/// A way is an ordered sequence of node references. Only its endpoints take
/// part in connectivity; interior nodes matter for roundabouts only.
#[derive(Debug, Clone)]
pub struct WayData {
    /// The ordered node references.
    pub nodes: Vec<NodeId>,
    /// Tags of the way.
    pub tags: Tags,
}

impl WayData {
    /// Creates an untagged way over the given nodes.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            tags: Tags::new(),
        }
    }

    /// Adds a tag, replacing any previous value for `key`.
    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Returns the first node, if any.
    #[must_use]
    pub fn first_node(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Returns the last node, if any.
    #[must_use]
    pub fn last_node(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Returns `true` if the way has enough nodes to connect to anything.
    #[must_use]
    pub fn is_connectable(&self) -> bool {
        self.nodes.len() >= 2
    }

    /// Returns `true` if the way starts and ends at the same node.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_connectable() && self.first_node() == self.last_node()
    }

    /// Returns `true` if `node` is the first or the last node.
    #[must_use]
    pub fn is_first_last_node(&self, node: NodeId) -> bool {
        self.first_node() == Some(node) || self.last_node() == Some(node)
    }

    /// Returns the travel restriction of the `oneway` tag.
    #[must_use]
    pub fn oneway(&self) -> Oneway {
        Oneway::from_tag(self.tags.get("oneway").map(String::as_str))
    }

    /// Returns the first node in permitted travel order.
    ///
    /// For `oneway=-1` this is the last stored node.
    #[must_use]
    pub fn travel_first_node(&self) -> Option<NodeId> {
        match self.oneway() {
            Oneway::Backward => self.last_node(),
            Oneway::Forward | Oneway::Bidirectional => self.first_node(),
        }
    }

    /// Returns the last node in permitted travel order.
    #[must_use]
    pub fn travel_last_node(&self) -> Option<NodeId> {
        match self.oneway() {
            Oneway::Backward => self.first_node(),
            Oneway::Forward | Oneway::Bidirectional => self.last_node(),
        }
    }
}
