use crate::data::{has_tag, DataSet, Member, NodeId, WayData};
use crate::math::orientation::{rotation_of, Rotation};
use crate::rules::RelationRules;

/// Role that marks a way travelled in stored node order on one carriageway.
pub const ROLE_FORWARD: &str = "forward";
/// Role that marks a way travelled against stored node order.
pub const ROLE_BACKWARD: &str = "backward";

/// Direction in which a route travels a one-way constrained member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteRole {
    Forward,
    Backward,
}

impl RouteRole {
    fn of(member: &Member) -> Option<Self> {
        match member.role.as_str() {
            ROLE_FORWARD => Some(Self::Forward),
            ROLE_BACKWARD => Some(Self::Backward),
            _ => None,
        }
    }
}

/// A way member resolved against the data set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MemberWay<'a> {
    /// Position of the member in the caller's slice.
    pub index: usize,
    pub way: &'a WayData,
    pub roundabout: Option<Rotation>,
    pub route_role: Option<RouteRole>,
}

impl<'a> MemberWay<'a> {
    /// Resolves `member`, returning `None` for non-way or missing members.
    pub fn resolve(
        store: &'a DataSet,
        rules: &RelationRules,
        index: usize,
        member: &Member,
    ) -> Option<Self> {
        let way = store.resolve_way(member)?;
        Some(Self {
            index,
            way,
            roundabout: roundabout_rotation(store, way, rules),
            route_role: RouteRole::of(member),
        })
    }

    /// Returns `true` if the member carries a `forward` or `backward` role.
    pub fn is_route_oneway(&self) -> bool {
        self.route_role.is_some()
    }

    pub fn is_backward(&self) -> bool {
        self.route_role == Some(RouteRole::Backward)
    }

    pub fn first(&self) -> Option<NodeId> {
        self.way.first_node()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.way.last_node()
    }

    /// First node in route travel order.
    pub fn entry(&self) -> Option<NodeId> {
        if self.is_backward() {
            self.last()
        } else {
            self.first()
        }
    }

    /// Last node in route travel order.
    pub fn exit(&self) -> Option<NodeId> {
        if self.is_backward() {
            self.first()
        } else {
            self.last()
        }
    }
}

/// Determines whether `way` is a roundabout and, if so, its rotation.
///
/// A roundabout is a closed `junction=roundabout|circular` way with more
/// than two and fewer than `max_roundabout_nodes` node references whose
/// first three nodes can be located.
pub(crate) fn roundabout_rotation(
    store: &DataSet,
    way: &WayData,
    rules: &RelationRules,
) -> Option<Rotation> {
    if !has_tag(&way.tags, "junction", &["roundabout", "circular"]) {
        return None;
    }
    let count = way.nodes.len();
    if count <= 2 || count >= rules.max_roundabout_nodes() || !way.is_closed() {
        return None;
    }
    let a = store.node(way.nodes[0]).ok()?.coord;
    let b = store.node(way.nodes[1]).ok()?.coord;
    let c = store.node(way.nodes[2]).ok()?.coord;
    Some(rotation_of(&a, &b, &c))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::Fixture;

    #[test]
    fn backward_role_swaps_entry_and_exit() {
        let mut fx = Fixture::new(2);
        let way = fx.way(&[0, 1]);
        let rules = RelationRules::default();

        let fwd = MemberWay::resolve(&fx.store, &rules, 0, &Member::way("forward", way)).unwrap();
        assert!(fwd.is_route_oneway());
        assert_eq!(fwd.entry(), Some(fx.node(0)));
        assert_eq!(fwd.exit(), Some(fx.node(1)));

        let bwd = MemberWay::resolve(&fx.store, &rules, 0, &Member::way("backward", way)).unwrap();
        assert!(bwd.is_backward());
        assert_eq!(bwd.entry(), Some(fx.node(1)));
        assert_eq!(bwd.exit(), Some(fx.node(0)));

        let plain = MemberWay::resolve(&fx.store, &rules, 0, &Member::way("", way)).unwrap();
        assert!(!plain.is_route_oneway());
    }

    #[test]
    fn node_members_do_not_resolve() {
        let fx = Fixture::new(1);
        let rules = RelationRules::default();
        let member = Member::node("stop", fx.node(0));
        assert!(MemberWay::resolve(&fx.store, &rules, 0, &member).is_none());
    }

    #[test]
    fn roundabout_needs_closed_junction_way() {
        let mut fx = Fixture::new(0);
        let ring = fx.ring(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
        let rules = RelationRules::default();

        let open = WayData::new(ring[..4].to_vec()).with_tag("junction", "roundabout");
        assert_eq!(roundabout_rotation(&fx.store, &open, &rules), None);

        let untagged = WayData::new(ring.clone());
        assert_eq!(roundabout_rotation(&fx.store, &untagged, &rules), None);

        let closed = WayData::new(ring.clone()).with_tag("junction", "roundabout");
        assert_eq!(
            roundabout_rotation(&fx.store, &closed, &rules),
            Some(Rotation::CounterClockwise)
        );

        let mut reversed = ring;
        reversed.reverse();
        let closed = WayData::new(reversed).with_tag("junction", "circular");
        assert_eq!(
            roundabout_rotation(&fx.store, &closed, &rules),
            Some(Rotation::Clockwise)
        );
    }

    #[test]
    fn roundabout_respects_node_limit() {
        let mut fx = Fixture::new(0);
        let ring = fx.ring(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
        let way = WayData::new(ring).with_tag("junction", "roundabout");
        let rules = RelationRules::new().with_max_roundabout_nodes(5).unwrap();
        assert_eq!(roundabout_rotation(&fx.store, &way, &rules), None);
    }
}
