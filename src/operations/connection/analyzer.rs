use tracing::debug;

use super::descriptor::ConnectionDescriptor;
use super::direction::Direction;
use crate::data::{DataSet, Member, NodeId, RelationId, Tags};
use crate::error::Result;
use crate::operations::classify::MemberWay;
use crate::rules::RelationRules;

/// Computes how every member of an ordered member list connects to its
/// neighbours.
///
/// The result has one [`ConnectionDescriptor`] per member. Members that do
/// not resolve to a way get an invalid descriptor and are skipped when
/// linking, so a node member between two connected ways does not break the
/// chain.
#[derive(Debug)]
pub struct ConnectionAnalyzer<'m> {
    members: &'m [Member],
    relation_tags: Option<&'m Tags>,
    rules: RelationRules,
    ignore_oneway: bool,
}

impl<'m> ConnectionAnalyzer<'m> {
    /// Creates an analyzer for a bare member list.
    #[must_use]
    pub fn new(members: &'m [Member]) -> Self {
        Self {
            members,
            relation_tags: None,
            rules: RelationRules::default(),
            ignore_oneway: false,
        }
    }

    /// Creates an analyzer for the members of a stored relation.
    ///
    /// The relation's tags decide whether `oneway` tags are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the relation is not in the data set.
    pub fn for_relation(store: &'m DataSet, relation: RelationId) -> Result<Self> {
        let data = store.relation(relation)?;
        Ok(Self {
            relation_tags: Some(&data.tags),
            ..Self::new(&data.members)
        })
    }

    /// Replaces the rules used for roundabout and one-way handling.
    #[must_use]
    pub fn with_rules(mut self, rules: RelationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Forces `oneway` tags to be ignored regardless of relation tags.
    #[must_use]
    pub fn ignoring_oneway(mut self, ignore: bool) -> Self {
        self.ignore_oneway = ignore;
        self
    }

    /// Computes one descriptor per member.
    #[must_use]
    pub fn execute(&self, store: &DataSet) -> Vec<ConnectionDescriptor> {
        let ways: Vec<MemberWay<'_>> = self
            .members
            .iter()
            .enumerate()
            .filter_map(|(i, m)| MemberWay::resolve(store, &self.rules, i, m))
            .collect();

        let chain = Chain {
            ways: &ways,
            ignore_oneway: self.ignore_oneway
                || self
                    .relation_tags
                    .is_some_and(|tags| self.rules.ignores_oneway(tags)),
        };
        let linked = chain.link();

        let mut descriptors = vec![ConnectionDescriptor::invalid(); self.members.len()];
        for (way, descriptor) in ways.iter().zip(linked) {
            descriptors[way.index] = descriptor;
        }
        debug!(
            members = self.members.len(),
            ways = ways.len(),
            loops = descriptors.iter().filter(|d| d.is_loop).count(),
            "analyzed member connections"
        );
        descriptors
    }
}

/// Position of the last member on one side of a one-way section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Unconnected,
    /// The section starts at the first way.
    BeforeStart,
    At(usize),
}

impl Anchor {
    fn preceding(k: usize) -> Self {
        k.checked_sub(1).map_or(Self::BeforeStart, Self::At)
    }
}

#[derive(Debug)]
struct ChainState {
    /// First way of the currently linked group.
    first_group: usize,
    last_forward: Anchor,
    last_backward: Anchor,
    /// No backward part has joined the current one-way section yet.
    oneway_beginning: bool,
}

impl ChainState {
    fn new() -> Self {
        Self {
            first_group: 0,
            last_forward: Anchor::Unconnected,
            last_backward: Anchor::Unconnected,
            oneway_beginning: false,
        }
    }
}

/// The resolved way members, linked in a single pass.
struct Chain<'c, 'w> {
    ways: &'c [MemberWay<'w>],
    ignore_oneway: bool,
}

impl Chain<'_, '_> {
    fn link(&self) -> Vec<ConnectionDescriptor> {
        let mut state = ChainState::new();
        let mut linked = (0..self.ways.len()).fold(
            Vec::with_capacity(self.ways.len()),
            |mut acc, k| {
                self.step(&mut state, &mut acc, k);
                acc
            },
        );
        if let Some(last) = self.ways.len().checked_sub(1) {
            self.close_loop(&state, &mut linked, last);
        }
        linked
    }

    fn step(&self, state: &mut ChainState, acc: &mut Vec<ConnectionDescriptor>, k: usize) {
        let oneway = self.ways[k].is_route_oneway();
        let mut desc = ConnectionDescriptor {
            link_prev: k > 0,
            ..ConnectionDescriptor::default()
        };

        if oneway {
            mark_oneway_start(state, acc.last(), k, &mut desc);
        }
        if desc.link_prev {
            if state.last_forward != Anchor::Unconnected
                && state.last_backward != Anchor::Unconnected
            {
                self.join_oneway_section(state, acc, k, &mut desc);
                if !desc.link_prev {
                    state.first_group = k;
                }
            }
            if !oneway {
                desc.direction = self.direction_between(k - 1, acc[k - 1].direction, k, false);
                desc.link_prev = desc.direction != Direction::None;
            }
        }
        if !desc.link_prev {
            desc.direction = self.direction_of_first(k);
            if oneway {
                desc.is_oneway_loop_forward_part = true;
                state.last_forward = Anchor::At(k);
            }
        }

        if let Some(prev) = acc.last_mut() {
            prev.link_next = desc.link_prev;
        }
        if !self.ignore_oneway {
            self.check_oneway_follows(acc, k, &mut desc);
        }

        let linked = desc.link_prev;
        acc.push(desc);
        if !linked {
            if k > 0 {
                self.close_loop(state, acc, k - 1);
            }
            state.first_group = k;
        }
    }

    /// Attaches way `k` to the open one-way section or closes it.
    fn join_oneway_section(
        &self,
        state: &mut ChainState,
        acc: &[ConnectionDescriptor],
        k: usize,
        desc: &mut ConnectionDescriptor,
    ) {
        let dir_fw = self.direction_from(state.last_forward, acc, k, false);
        let dir_bw = if state.oneway_beginning {
            let dir = match state.last_backward {
                Anchor::At(i) => self.direction_between(i, acc[i].direction, k, true),
                Anchor::BeforeStart | Anchor::Unconnected => {
                    let start = acc
                        .get(state.first_group)
                        .map_or(Direction::None, |d| d.direction.reverse());
                    self.direction_between(state.first_group, start, k, true)
                }
            };
            if dir != Direction::None {
                state.oneway_beginning = false;
            }
            dir
        } else {
            self.direction_from(state.last_backward, acc, k, true)
        };

        if !self.ways[k].is_route_oneway() {
            state.last_forward = Anchor::Unconnected;
            state.last_backward = Anchor::Unconnected;
            if dir_fw == Direction::None || dir_bw == Direction::None {
                desc.link_prev = false;
            }
            return;
        }

        if dir_bw != Direction::None {
            desc.direction = dir_bw;
            state.last_backward = Anchor::At(k);
            desc.is_oneway_loop_backward_part = true;
        }
        if dir_fw != Direction::None {
            desc.direction = dir_fw;
            state.last_forward = Anchor::At(k);
            desc.is_oneway_loop_forward_part = true;
        }

        if dir_fw == Direction::None && dir_bw == Direction::None {
            // Disconnected from the open section; start a new one here.
            desc.link_prev = false;
            desc.is_oneway_head = true;
            state.last_forward = Anchor::preceding(k);
            state.last_backward = Anchor::preceding(k);
            state.oneway_beginning = true;
        } else if dir_fw != Direction::None && dir_bw != Direction::None {
            // Both sides meet here, the section ends with this way.
            if k + 1 < self.ways.len()
                && self.direction_between(k, dir_fw, k + 1, false) != Direction::None
            {
                desc.is_oneway_loop_backward_part = false;
                desc.direction = dir_fw;
            } else {
                desc.is_oneway_loop_forward_part = false;
                desc.direction = dir_bw;
            }
            desc.is_oneway_tail = true;
        }
    }

    fn direction_from(
        &self,
        anchor: Anchor,
        acc: &[ConnectionDescriptor],
        k: usize,
        reversed: bool,
    ) -> Direction {
        match anchor {
            Anchor::At(i) => acc.get(i).map_or(Direction::None, |d| {
                self.direction_between(i, d.direction, k, reversed)
            }),
            Anchor::BeforeStart | Anchor::Unconnected => Direction::None,
        }
    }

    /// Direction in which way `k` is entered when leaving way `from`
    /// travelled in `from_dir`.
    ///
    /// With `reversed` set, route one-way members are matched at their exit
    /// node instead of their entry node.
    fn direction_between(
        &self,
        from: usize,
        from_dir: Direction,
        k: usize,
        reversed: bool,
    ) -> Direction {
        let (Some(prev), Some(way)) = (self.ways.get(from), self.ways.get(k)) else {
            return Direction::None;
        };
        if !prev.way.is_connectable() || !way.way.is_connectable() {
            return Direction::None;
        }
        let nodes = &prev.way.nodes;
        let attach: &[NodeId] = match from_dir {
            Direction::None => return Direction::None,
            Direction::Forward => &nodes[nodes.len() - 1..],
            Direction::Backward => &nodes[..1],
            Direction::RoundaboutClockwise | Direction::RoundaboutCounterClockwise => nodes,
        };

        for &n in attach {
            if let Some(rotation) = way.roundabout {
                if way.way.nodes.contains(&n) {
                    return rotation.into();
                }
            } else if way.is_route_oneway() {
                if !reversed && way.entry() == Some(n) {
                    return if way.is_backward() {
                        Direction::Backward
                    } else {
                        Direction::Forward
                    };
                }
                if reversed && way.exit() == Some(n) {
                    return if way.is_backward() {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    };
                }
            } else if way.first() == Some(n) {
                return Direction::Forward;
            } else if way.last() == Some(n) {
                return Direction::Backward;
            }
        }
        Direction::None
    }

    /// Direction of a way that does not link to its predecessor, guessed
    /// from how it connects to its successor.
    fn direction_of_first(&self, k: usize) -> Direction {
        let way = &self.ways[k];
        if !way.way.is_connectable() {
            return Direction::None;
        }
        if let Some(rotation) = way.roundabout {
            return rotation.into();
        }
        if way.is_route_oneway() {
            return if way.is_backward() {
                Direction::Backward
            } else {
                Direction::Forward
            };
        }
        let attach = |dir| {
            let next = self.direction_between(k, dir, k + 1, false);
            let attaches = next != Direction::None;
            let continues =
                attaches && self.direction_between(k + 1, next, k + 2, false) != Direction::None;
            (attaches, continues)
        };
        match (attach(Direction::Forward), attach(Direction::Backward)) {
            ((false, _), (false, _)) => Direction::None,
            ((true, _), (false, _)) => Direction::Forward,
            ((false, _), (true, _)) => Direction::Backward,
            // Both ends touch the successor: follow the side that keeps going,
            // else leave through the lower node id so reversal flips the pick.
            ((true, fw), (true, bw)) if fw != bw => {
                if fw {
                    Direction::Forward
                } else {
                    Direction::Backward
                }
            }
            _ if way.way.last_node() <= way.way.first_node() => Direction::Forward,
            _ => Direction::Backward,
        }
    }

    /// Marks the group ending at `last` as a loop if it closes on itself.
    fn close_loop(&self, state: &ChainState, acc: &mut [ConnectionDescriptor], last: usize) {
        let first = state.first_group;
        if first > last {
            return;
        }
        let is_loop = if first == last {
            self.direction_between(last, Direction::Forward, last, false) == Direction::Forward
        } else {
            let expected = acc[first].direction;
            expected != Direction::None
                && self.direction_between(last, acc[last].direction, first, false) == expected
        };
        if is_loop {
            for desc in &mut acc[first..=last] {
                desc.is_loop = true;
            }
        }
    }

    /// Clears the follow flags when consecutive `oneway` tags disagree.
    fn check_oneway_follows(
        &self,
        acc: &mut [ConnectionDescriptor],
        k: usize,
        desc: &mut ConnectionDescriptor,
    ) {
        let Some(p) = k.checked_sub(1) else {
            return;
        };
        let way = self.ways[k].way;
        let prev = self.ways[p].way;
        let (oneway, prev_oneway) = (way.oneway().is_oneway(), prev.oneway().is_oneway());

        if oneway
            && prev_oneway
            && way.travel_first_node() != prev.travel_last_node()
            && way.travel_last_node() != prev.travel_first_node()
        {
            desc.oneway_follows_previous = false;
            acc[p].oneway_follows_next = false;
        } else if oneway
            && !prev_oneway
            && way
                .travel_last_node()
                .is_some_and(|n| prev.is_first_last_node(n))
        {
            desc.oneway_follows_previous = false;
        }
    }
}

fn mark_oneway_start(
    state: &mut ChainState,
    prev: Option<&ConnectionDescriptor>,
    k: usize,
    desc: &mut ConnectionDescriptor,
) {
    if prev.is_some_and(|d| d.is_oneway_tail) {
        desc.is_oneway_head = true;
    }
    if state.last_forward == Anchor::Unconnected && state.last_backward == Anchor::Unconnected {
        desc.is_oneway_head = true;
        state.last_forward = Anchor::preceding(k);
        state.last_backward = Anchor::preceding(k);
        state.oneway_beginning = true;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::data::{RelationData, WayId};
    use crate::fixtures::{labels, Fixture};

    fn way_members(ways: &[WayId]) -> Vec<Member> {
        ways.iter().map(|&w| Member::way("", w)).collect()
    }

    fn analyze(fx: &Fixture, members: &[Member]) -> Vec<ConnectionDescriptor> {
        ConnectionAnalyzer::new(members).execute(&fx.store)
    }

    /// Ways A..G over nodes 0..8 where E and F run against the chain.
    fn generic(fx: &mut Fixture) -> [WayId; 7] {
        [
            fx.way(&[0, 1]),
            fx.way(&[1, 2]),
            fx.way(&[2, 3]),
            fx.way(&[3, 4]),
            fx.way(&[5, 4]),
            fx.way(&[6, 5]),
            fx.way(&[7, 8]),
        ]
    }

    #[test]
    fn empty_member_list() {
        let fx = Fixture::new(0);
        assert!(analyze(&fx, &[]).is_empty());
    }

    #[test]
    fn unsorted_members() {
        let mut fx = Fixture::new(11);
        let [a, b, c, d, e, f, g] = generic(&mut fx);
        let mut members = way_members(&[e, g, b, c, a, f, d]);
        members.push(Member::node("", fx.node(9)));
        members.push(Member::node("", fx.node(10)));

        assert_eq!(
            labels(&analyze(&fx, &members)),
            ["NONE", "NONE", "FORWARD", "FORWARD", "NONE", "NONE", "NONE", "I", "I"]
        );
    }

    #[test]
    fn sorted_members() {
        let mut fx = Fixture::new(11);
        let [a, b, c, d, e, f, g] = generic(&mut fx);
        let mut members = way_members(&[a, b, c, d, e, f, g]);
        members.push(Member::node("", fx.node(9)));
        members.push(Member::node("", fx.node(10)));

        let result = analyze(&fx, &members);
        assert_eq!(
            labels(&result),
            [
                "FORWARD", "FORWARD", "FORWARD", "FORWARD", "BACKWARD", "BACKWARD", "NONE", "I",
                "I"
            ]
        );
        assert!(!result[0].link_prev);
        assert!(result[0].link_next);
        assert!(result[5].link_prev);
        assert!(!result[5].link_next);
        assert!(!result[6].link_prev);
    }

    fn assert_reversal_flips(fx: &mut Fixture, ways: &[WayId]) {
        let members = way_members(ways);
        let before = analyze(fx, &members);
        for &w in ways {
            fx.reverse(w);
        }
        let after = analyze(fx, &members);
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(
                a.direction,
                b.direction.reverse(),
                "{:?} vs {:?}",
                labels(&before),
                labels(&after)
            );
            assert_eq!(a.is_loop, b.is_loop);
            assert_eq!(a.link_prev, b.link_prev);
            assert_eq!(a.valid, b.valid);
        }
    }

    #[test]
    fn reversing_every_way_flips_directions() {
        let mut fx = Fixture::new(9);
        let ways = generic(&mut fx);
        assert_reversal_flips(&mut fx, &ways);
    }

    #[test]
    fn parallel_ways_flip_when_reversed() {
        let mut fx = Fixture::new(3);
        let ways = [fx.way(&[2, 1]), fx.way(&[2, 1]), fx.way(&[0, 1])];
        assert_eq!(
            labels(&analyze(&fx, &way_members(&ways))),
            ["BACKWARD", "FORWARD", "BACKWARD"]
        );
        assert_reversal_flips(&mut fx, &ways);

        let mut fx = Fixture::new(3);
        let pair = [fx.way(&[2, 1]), fx.way(&[2, 1])];
        assert_eq!(
            labels(&analyze(&fx, &way_members(&pair))),
            ["L FORWARD", "L BACKWARD"]
        );
        assert_reversal_flips(&mut fx, &pair);
    }

    #[test]
    fn node_member_does_not_break_chain() {
        let mut fx = Fixture::new(10);
        let [a, b, ..] = generic(&mut fx);
        let members = vec![
            Member::way("", a),
            Member::node("stop", fx.node(9)),
            Member::way("", b),
        ];

        let result = analyze(&fx, &members);
        assert_eq!(labels(&result), ["FORWARD", "I", "FORWARD"]);
        assert!(result[0].link_next);
        assert!(result[2].link_prev);
    }

    #[test]
    fn nested_relation_does_not_break_chain() {
        let mut fx = Fixture::new(9);
        let [a, b, ..] = generic(&mut fx);
        let nested = fx.store.add_relation(RelationData::default());
        let members = vec![
            Member::way("", a),
            Member::relation("", nested),
            Member::way("", b),
        ];

        let result = analyze(&fx, &members);
        assert_eq!(labels(&result), ["FORWARD", "I", "FORWARD"]);
        assert!(!result[1].valid);
        assert!(result[0].link_next);
        assert!(result[2].link_prev);
    }

    #[test]
    fn opaque_members_only() {
        let mut fx = Fixture::new(1);
        let nested = fx.store.add_relation(RelationData::default());
        let members = vec![
            Member::node("", fx.node(0)),
            Member::relation("subarea", nested),
        ];

        let result = analyze(&fx, &members);
        assert_eq!(labels(&result), ["I", "I"]);
        assert!(result
            .iter()
            .all(|d| !d.valid && d.direction == Direction::None));
    }

    #[test]
    fn missing_way_is_invalid() {
        let mut fx = Fixture::new(9);
        let [a, b, c, ..] = generic(&mut fx);
        fx.store.remove_way(b);

        let result = analyze(&fx, &way_members(&[a, b, c]));
        assert_eq!(labels(&result), ["NONE", "I", "NONE"]);
        assert!(!result[1].valid);
    }

    #[test]
    fn single_node_way_has_no_direction() {
        let mut fx = Fixture::new(3);
        let a = fx.way(&[0, 1]);
        let stub = fx.way(&[1]);
        let b = fx.way(&[1, 2]);

        let result = analyze(&fx, &way_members(&[a, stub, b]));
        assert_eq!(labels(&result), ["NONE", "NONE", "NONE"]);
        assert!(result.iter().all(|d| d.valid));
    }

    #[test]
    fn ring_of_ways_is_a_loop() {
        let mut fx = Fixture::new(4);
        let ring = [
            fx.way(&[0, 1]),
            fx.way(&[1, 2]),
            fx.way(&[2, 3]),
            fx.way(&[3, 0]),
        ];
        assert_eq!(labels(&analyze(&fx, &way_members(&ring))), ["L FORWARD"; 4]);
    }

    #[test]
    fn closed_way_alone_is_a_loop() {
        let mut fx = Fixture::new(3);
        let closed = fx.way(&[0, 1, 2, 0]);
        assert_eq!(labels(&analyze(&fx, &way_members(&[closed]))), ["L NONE"]);
    }

    #[test]
    fn dual_carriageway_section() {
        let mut fx = Fixture::new(6);
        let w1 = fx.way(&[0, 1]);
        let f1 = fx.way(&[1, 2]);
        let f2 = fx.way(&[2, 3]);
        let g2 = fx.way(&[5, 1]);
        let g1 = fx.way(&[3, 5]);
        let w2 = fx.way(&[3, 4]);
        let members = vec![
            Member::way("", w1),
            Member::way("forward", f1),
            Member::way("forward", f2),
            Member::way("forward", g2),
            Member::way("forward", g1),
            Member::way("", w2),
        ];

        assert_eq!(
            labels(&analyze(&fx, &members)),
            [
                "FORWARD",
                "FPH FORWARD",
                "FP FORWARD",
                "BP BACKWARD",
                "BPT BACKWARD",
                "FORWARD"
            ]
        );
    }

    #[test]
    fn roundabout_members() {
        let mut fx = Fixture::new(2);
        let ring = fx.ring(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
        let w_in = fx.way_through(vec![fx.node(0), ring[0]], &[]);
        let w_out = fx.way_through(vec![ring[2], fx.node(1)], &[]);
        let round = fx.way_through(ring, &[("junction", "roundabout")]);

        let result = analyze(&fx, &way_members(&[w_in, round, w_out]));
        assert_eq!(labels(&result), ["FORWARD", "ROUNDABOUT_CCW", "FORWARD"]);
        assert!(result[1].direction.is_roundabout());
    }

    /// Seven ways `w_i = [i, i+1]` tagged `oneway=yes`, with `w5` stored
    /// reversed.
    fn oneway_chain(fx: &mut Fixture) -> Vec<WayId> {
        (0..7)
            .map(|i| {
                let nodes = if i == 5 { [6, 5] } else { [i, i + 1] };
                fx.tagged_way(&nodes, &[("oneway", "yes")])
            })
            .collect()
    }

    fn follows(result: &[ConnectionDescriptor]) -> Vec<(bool, bool)> {
        result
            .iter()
            .map(|d| (d.oneway_follows_previous, d.oneway_follows_next))
            .collect()
    }

    const ALL_FOLLOW: [(bool, bool); 7] = [(true, true); 7];

    #[test]
    fn oneway_follow_flags() {
        let mut fx = Fixture::new(8);
        let ways = oneway_chain(&mut fx);
        let members = way_members(&ways);

        let mut expected = ALL_FOLLOW;
        expected[4] = (true, false);
        expected[5] = (false, false);
        expected[6] = (false, true);
        assert_eq!(follows(&analyze(&fx, &members)), expected);
        let lenient = ConnectionAnalyzer::new(&members)
            .ignoring_oneway(true)
            .execute(&fx.store);
        assert_eq!(follows(&lenient), ALL_FOLLOW);

        fx.reverse(ways[6]);
        let mut expected = ALL_FOLLOW;
        expected[4] = (true, false);
        expected[5] = (false, true);
        assert_eq!(follows(&analyze(&fx, &members)), expected);

        fx.reverse(ways[6]);
        fx.reverse(ways[5]);
        assert_eq!(follows(&analyze(&fx, &members)), ALL_FOLLOW);

        for &w in &ways {
            fx.reverse(w);
        }
        assert_eq!(follows(&analyze(&fx, &members)), ALL_FOLLOW);
    }

    #[test]
    fn oneway_follow_flags_with_mixed_tags() {
        let mut fx = Fixture::new(8);
        let ways = oneway_chain(&mut fx);
        let members = way_members(&ways);

        fx.store.way_mut(ways[5]).unwrap().tags.remove("oneway");
        assert_eq!(follows(&analyze(&fx, &members)), ALL_FOLLOW);

        fx.store
            .way_mut(ways[5])
            .unwrap()
            .tags
            .insert("oneway".into(), "-1".into());
        assert_eq!(follows(&analyze(&fx, &members)), ALL_FOLLOW);

        fx.store.way_mut(ways[5]).unwrap().tags.remove("oneway");
        fx.store
            .way_mut(ways[6])
            .unwrap()
            .tags
            .insert("oneway".into(), "-1".into());
        let mut expected = ALL_FOLLOW;
        expected[6] = (false, true);
        assert_eq!(follows(&analyze(&fx, &members)), expected);
    }

    #[test]
    fn hiking_route_ignores_oneway() {
        let mut fx = Fixture::new(8);
        let ways = oneway_chain(&mut fx);
        let relation = fx.store.add_relation(
            RelationData::new(way_members(&ways))
                .with_tag("type", "route")
                .with_tag("route", "hiking"),
        );

        let result = ConnectionAnalyzer::for_relation(&fx.store, relation)
            .unwrap()
            .execute(&fx.store);
        assert_eq!(follows(&result), ALL_FOLLOW);

        let strict = ConnectionAnalyzer::for_relation(&fx.store, relation)
            .unwrap()
            .with_rules(RelationRules::new().without_oneway_exemptions())
            .execute(&fx.store);
        assert_ne!(follows(&strict), ALL_FOLLOW);
    }

    #[test]
    fn unknown_relation_fails() {
        let fx = Fixture::new(0);
        assert!(ConnectionAnalyzer::for_relation(&fx.store, RelationId::default()).is_err());
    }
}
