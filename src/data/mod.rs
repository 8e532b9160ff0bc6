pub mod node;
pub mod relation;
pub mod tags;
pub mod way;

pub use node::{NodeData, NodeId};
pub use relation::{Member, MemberTarget, RelationData, RelationId};
pub use tags::{has_tag, Oneway, Tags};
pub use way::{WayData, WayId};

use crate::error::DataError;
use slotmap::SlotMap;

/// Central arena that owns all nodes, ways and relations.
///
/// Primitives reference each other via typed IDs (generational indices),
/// so a member whose way was removed simply fails to resolve.
#[derive(Debug, Default)]
pub struct DataSet {
    nodes: SlotMap<NodeId, NodeData>,
    ways: SlotMap<WayId, WayData>,
    relations: SlotMap<RelationId, RelationData>,
}

impl DataSet {
    /// Creates a new, empty data set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Inserts a node and returns its ID.
    pub fn add_node(&mut self, data: NodeData) -> NodeId {
        self.nodes.insert(data)
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the data set.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, DataError> {
        self.nodes
            .get(id)
            .ok_or_else(|| DataError::EntityNotFound("node".into()))
    }

    // --- Way operations ---

    /// Inserts a way and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `DataError::DanglingReference` if the way references a node
    /// that is not in the data set.
    pub fn add_way(&mut self, data: WayData) -> Result<WayId, DataError> {
        if let Some(position) = data.nodes.iter().position(|&n| !self.nodes.contains_key(n)) {
            return Err(DataError::DanglingReference { position });
        }
        Ok(self.ways.insert(data))
    }

    /// Returns a reference to the way data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the way is not in the data set.
    pub fn way(&self, id: WayId) -> Result<&WayData, DataError> {
        self.ways
            .get(id)
            .ok_or_else(|| DataError::EntityNotFound("way".into()))
    }

    /// Returns a mutable reference to the way data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the way is not in the data set.
    pub fn way_mut(&mut self, id: WayId) -> Result<&mut WayData, DataError> {
        self.ways
            .get_mut(id)
            .ok_or_else(|| DataError::EntityNotFound("way".into()))
    }

    /// Removes a way, returning its data if it was present.
    pub fn remove_way(&mut self, id: WayId) -> Option<WayData> {
        self.ways.remove(id)
    }

    // --- Relation operations ---

    /// Inserts a relation and returns its ID.
    pub fn add_relation(&mut self, data: RelationData) -> RelationId {
        self.relations.insert(data)
    }

    /// Returns a reference to the relation data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the relation is not in the data set.
    pub fn relation(&self, id: RelationId) -> Result<&RelationData, DataError> {
        self.relations
            .get(id)
            .ok_or_else(|| DataError::EntityNotFound("relation".into()))
    }

    /// Iterates over all relations.
    pub fn relations(&self) -> impl Iterator<Item = (RelationId, &RelationData)> {
        self.relations.iter()
    }

    // --- Member resolution ---

    /// Resolves a member to its way, if it references a way that exists.
    #[must_use]
    pub fn resolve_way(&self, member: &Member) -> Option<&WayData> {
        member.as_way().and_then(|id| self.ways.get(id))
    }

    /// Returns the tags of any member target, if it exists.
    #[must_use]
    pub fn tags_of(&self, target: MemberTarget) -> Option<&Tags> {
        match target {
            MemberTarget::Node(id) => self.nodes.get(id).map(|n| &n.tags),
            MemberTarget::Way(id) => self.ways.get(id).map(|w| &w.tags),
            MemberTarget::Relation(id) => self.relations.get(id).map(|r| &r.tags),
        }
    }

    /// Returns the value of tag `key` on a member target.
    #[must_use]
    pub fn tag_of(&self, target: MemberTarget, key: &str) -> Option<&str> {
        self.tags_of(target)
            .and_then(|tags| tags.get(key))
            .map(String::as_str)
    }
}
