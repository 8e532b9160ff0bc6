use super::node::NodeId;
use super::tags::Tags;
use super::way::WayId;

slotmap::new_key_type! {
    /// Unique identifier for a relation in the data set.
    pub struct RelationId;
}

/// The primitive a relation member points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberTarget {
    Node(NodeId),
    Way(WayId),
    Relation(RelationId),
}

/// A role-tagged reference to a primitive inside a relation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Member {
    /// Free-text role, e.g. `forward`, `stop` or `street`.
    pub role: String,
    /// The referenced primitive.
    pub target: MemberTarget,
}

impl Member {
    /// Creates a new member.
    #[must_use]
    pub fn new(role: &str, target: MemberTarget) -> Self {
        Self {
            role: role.to_owned(),
            target,
        }
    }

    /// Creates a way member.
    #[must_use]
    pub fn way(role: &str, way: WayId) -> Self {
        Self::new(role, MemberTarget::Way(way))
    }

    /// Creates a node member.
    #[must_use]
    pub fn node(role: &str, node: NodeId) -> Self {
        Self::new(role, MemberTarget::Node(node))
    }

    /// Creates a nested relation member.
    #[must_use]
    pub fn relation(role: &str, relation: RelationId) -> Self {
        Self::new(role, MemberTarget::Relation(relation))
    }

    /// Returns the way id if this member references a way.
    #[must_use]
    pub fn as_way(&self) -> Option<WayId> {
        match self.target {
            MemberTarget::Way(id) => Some(id),
            MemberTarget::Node(_) | MemberTarget::Relation(_) => None,
        }
    }

    /// Returns `true` if the member's role equals `role`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Data associated with a relation.
#[derive(Debug, Clone, Default)]
pub struct RelationData {
    /// Tags of the relation.
    pub tags: Tags,
    /// Ordered members.
    pub members: Vec<Member>,
}

impl RelationData {
    /// Creates an untagged relation with the given members.
    #[must_use]
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            tags: Tags::new(),
            members,
        }
    }

    /// Adds a tag, replacing any previous value for `key`.
    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Returns `true` if any member references `target`.
    #[must_use]
    pub fn contains(&self, target: MemberTarget) -> bool {
        self.members.iter().any(|m| m.target == target)
    }
}
