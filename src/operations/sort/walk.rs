use tracing::{debug, trace};

use super::node_map::{Edge, NodeMap};
use crate::data::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    /// Walking the outbound arc of a one-way section that left the
    /// single carriageway at `split`. `start` is where the arc begins in
    /// the output.
    Arc { split: NodeId, start: usize },
}

/// Where a run starts and how it continues in both directions.
#[derive(Debug)]
struct Start {
    way: usize,
    head: NodeId,
    tail: NodeId,
    mode: Mode,
}

impl Start {
    /// A run that leaves `way` at `node`.
    fn departing(way: usize, edge: &Edge, node: NodeId) -> Option<Self> {
        match *edge {
            Edge::Bidirectional { first, last } => Some(Self {
                way,
                head: if node == first { last } else { first },
                tail: node,
                mode: Mode::Normal,
            }),
            Edge::Oneway { exit, .. } => Some(Self {
                way,
                head: exit,
                tail: node,
                mode: Mode::Arc {
                    split: node,
                    start: 0,
                },
            }),
            Edge::Roundabout { .. } => None,
        }
    }
}

/// Greedy walker that orders the ways of a [`NodeMap`].
pub(super) struct Walker<'a> {
    map: &'a NodeMap,
    visited: Vec<bool>,
}

impl<'a> Walker<'a> {
    pub fn new(map: &'a NodeMap) -> Self {
        Self {
            map,
            visited: vec![false; map.len()],
        }
    }

    /// Returns every way exactly once, component by component.
    pub fn order(mut self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.map.len());
        for component in self.map.components() {
            debug!(ways = component.len(), earliest = component[0], "sorting component");
            let mut runs = 0;
            while let Some(run) = self.run(&component) {
                runs += 1;
                order.extend(run);
            }
            if runs > 1 {
                debug!(runs, "component needed several runs");
            }
        }
        order
    }

    fn run(&mut self, component: &[usize]) -> Option<Vec<usize>> {
        let start = self.start_of(component)?;
        trace!(?start, "starting run");
        self.visited[start.way] = true;

        let mut forward = vec![start.way];
        self.extend(&mut forward, start.head, start.mode, false);
        let mut run = Vec::new();
        self.extend(&mut run, start.tail, Mode::Normal, true);
        run.reverse();
        run.extend(forward);
        Some(run)
    }

    /// Picks the start of the next run: a dead end, else the earliest
    /// two-way way, else the earliest remaining way.
    fn start_of(&self, component: &[usize]) -> Option<Start> {
        let unvisited: Vec<usize> = component
            .iter()
            .copied()
            .filter(|&w| !self.visited[w])
            .collect();

        let dead_end = unvisited.iter().find_map(|&way| {
            let edge = self.map.edge(way);
            let node = edge
                .departures()
                .into_iter()
                .find(|&n| self.unvisited_degree(n) == 1)?;
            Start::departing(way, edge, node)
        });
        if dead_end.is_some() {
            return dead_end;
        }

        let way = unvisited
            .iter()
            .copied()
            .find(|&w| matches!(self.map.edge(w), Edge::Bidirectional { .. }))
            .or_else(|| unvisited.first().copied())?;
        trace!(way, "no dead end left");
        let edge = self.map.edge(way);
        match edge {
            Edge::Roundabout { nodes } => Some(Start {
                way,
                head: nodes[0],
                tail: nodes[0],
                mode: Mode::Normal,
            }),
            Edge::Bidirectional { first: node, .. } | Edge::Oneway { entry: node, .. } => {
                Start::departing(way, edge, *node)
            }
        }
    }

    /// Extends `out` from `head` until no attachable way is left.
    ///
    /// A `mirrored` walk runs against travel direction; its output is
    /// reversed by the caller.
    fn extend(&mut self, out: &mut Vec<usize>, mut head: NodeId, mut mode: Mode, mirrored: bool) {
        loop {
            match mode {
                Mode::Normal => {
                    if let Some((way, next)) = self.take_two_way(head) {
                        out.push(way);
                        head = next;
                    } else if let Some((way, next)) = self.take_departing(head, mirrored) {
                        mode = Mode::Arc {
                            split: head,
                            start: out.len(),
                        };
                        out.push(way);
                        head = next;
                    } else {
                        return;
                    }
                }
                Mode::Arc { split, start } => {
                    if head == split {
                        mode = Mode::Normal;
                        continue;
                    }
                    if !self.arc_ends_at(head, mirrored) {
                        if let Some((way, next)) = self.take_departing(head, mirrored) {
                            out.push(way);
                            head = next;
                            continue;
                        }
                    }
                    let back = self.take_return_arc(split, head, mirrored);
                    trace!(outbound = out.len() - start, back = back.len(), "closed one-way section");
                    if mirrored {
                        out.splice(start..start, back);
                    } else {
                        out.extend(back);
                    }
                    mode = Mode::Normal;
                }
            }
        }
    }

    fn unvisited(&self, node: NodeId) -> impl Iterator<Item = usize> + '_ {
        self.map
            .incident(node)
            .iter()
            .copied()
            .filter(|&w| !self.visited[w])
    }

    fn unvisited_degree(&self, node: NodeId) -> usize {
        self.unvisited(node).count()
    }

    fn has_two_way(&self, node: NodeId) -> bool {
        self.unvisited(node).any(|w| !self.map.edge(w).is_oneway())
    }

    fn departing(&self, node: NodeId, mirrored: bool) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.unvisited(node).filter_map(move |w| {
            let (from, to) = self.map.edge(w).oneway_ends(mirrored)?;
            (from == node).then_some((w, to))
        })
    }

    /// The outbound arc stops where it meets a two-way way or the one-way
    /// continuation is not unique.
    fn arc_ends_at(&self, node: NodeId, mirrored: bool) -> bool {
        self.has_two_way(node) || self.departing(node, mirrored).count() != 1
    }

    fn take_two_way(&mut self, head: NodeId) -> Option<(usize, NodeId)> {
        let map = self.map;
        let way = self.unvisited(head).find(|&w| !map.edge(w).is_oneway())?;
        self.visited[way] = true;
        let next = match map.edge(way) {
            Edge::Bidirectional { first, last } => {
                if *first == head {
                    *last
                } else {
                    *first
                }
            }
            Edge::Roundabout { nodes } => self.roundabout_exit(nodes, head),
            Edge::Oneway { exit, .. } => *exit,
        };
        Some((way, next))
    }

    fn take_departing(&mut self, head: NodeId, mirrored: bool) -> Option<(usize, NodeId)> {
        let (way, next) = self.departing(head, mirrored).next()?;
        self.visited[way] = true;
        Some((way, next))
    }

    /// Leaves a roundabout at the first node after `entry`, in way order,
    /// that still has unvisited ways.
    fn roundabout_exit(&self, nodes: &[NodeId], entry: NodeId) -> NodeId {
        let Some(pos) = nodes.iter().position(|&n| n == entry) else {
            return entry;
        };
        nodes
            .iter()
            .cycle()
            .skip(pos + 1)
            .take(nodes.len() - 1)
            .copied()
            .find(|&n| self.unvisited_degree(n) > 0)
            .unwrap_or(entry)
    }

    /// Collects the return arc of a one-way section, listed from `split`
    /// back to `merge`.
    fn take_return_arc(&mut self, split: NodeId, merge: NodeId, mirrored: bool) -> Vec<usize> {
        let map = self.map;
        let mut arc = Vec::new();
        let mut back = split;
        while back != merge {
            let Some((way, from)) = self.unvisited(back).find_map(|w| {
                let (from, to) = map.edge(w).oneway_ends(mirrored)?;
                (to == back).then_some((w, from))
            }) else {
                break;
            };
            self.visited[way] = true;
            arc.push(way);
            back = from;
        }
        arc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::Fixture;

    fn bidi(fx: &Fixture, first: usize, last: usize) -> Edge {
        Edge::Bidirectional {
            first: fx.node(first),
            last: fx.node(last),
        }
    }

    fn oneway(fx: &Fixture, entry: usize, exit: usize) -> Edge {
        Edge::Oneway {
            entry: fx.node(entry),
            exit: fx.node(exit),
        }
    }

    fn order(edges: Vec<Edge>) -> Vec<usize> {
        Walker::new(&NodeMap::new(edges)).order()
    }

    #[test]
    fn path_starts_at_dead_end() {
        let fx = Fixture::new(4);
        let order = order(vec![bidi(&fx, 2, 3), bidi(&fx, 0, 1), bidi(&fx, 1, 2)]);
        assert_eq!(order, [0, 2, 1]);
    }

    #[test]
    fn branch_starts_another_run() {
        let fx = Fixture::new(5);
        // 0 - 1 - 2 with a spur 1 - 3 and a detached 4 - 4 loop
        let order = order(vec![
            bidi(&fx, 1, 2),
            bidi(&fx, 1, 3),
            bidi(&fx, 0, 1),
            bidi(&fx, 4, 4),
        ]);
        assert_eq!(order, [0, 1, 2, 3]);
    }

    #[test]
    fn cycle_extends_backwards_from_first_way() {
        let fx = Fixture::new(6);
        // triangles 0-1-2 and 3-4-5 joined by 0 - 3
        let order = order(vec![
            bidi(&fx, 0, 3),
            bidi(&fx, 0, 1),
            bidi(&fx, 3, 4),
            bidi(&fx, 1, 2),
            bidi(&fx, 4, 5),
            bidi(&fx, 2, 0),
            bidi(&fx, 5, 3),
        ]);
        assert_eq!(order, [5, 3, 1, 0, 2, 4, 6]);
    }

    #[test]
    fn oneway_section_lists_outbound_then_return_arc() {
        let fx = Fixture::new(6);
        let order = order(vec![
            oneway(&fx, 5, 1),
            bidi(&fx, 3, 4),
            oneway(&fx, 1, 2),
            oneway(&fx, 3, 5),
            bidi(&fx, 0, 1),
            oneway(&fx, 2, 3),
        ]);
        assert_eq!(order, [1, 3, 0, 5, 2, 4]);
    }

    #[test]
    fn oneway_section_behind_start_is_spliced() {
        let fx = Fixture::new(6);
        // no dead end: both single carriageways are closed off by a loop
        let order = order(vec![
            bidi(&fx, 3, 4),
            bidi(&fx, 4, 4),
            oneway(&fx, 1, 2),
            oneway(&fx, 2, 3),
            oneway(&fx, 3, 5),
            oneway(&fx, 5, 1),
            bidi(&fx, 0, 1),
            bidi(&fx, 0, 0),
        ]);
        assert_eq!(order, [7, 6, 2, 3, 5, 4, 0, 1]);
    }

    #[test]
    fn roundabout_is_left_where_the_route_continues() {
        let fx = Fixture::new(6);
        let ring = Edge::Roundabout {
            nodes: vec![fx.node(0), fx.node(1), fx.node(2), fx.node(3)],
        };
        let order = order(vec![bidi(&fx, 2, 5), ring, bidi(&fx, 4, 0)]);
        assert_eq!(order, [0, 1, 2]);
    }
}
