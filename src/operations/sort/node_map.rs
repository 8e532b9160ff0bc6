use std::collections::{HashMap, VecDeque};

use crate::data::NodeId;
use crate::operations::classify::MemberWay;

/// How a way can be entered and left while walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Edge {
    Bidirectional { first: NodeId, last: NodeId },
    /// Travelled from `entry` to `exit` only.
    Oneway { entry: NodeId, exit: NodeId },
    /// Attached at every node; `nodes` holds the ring without its closing
    /// node.
    Roundabout { nodes: Vec<NodeId> },
}

impl Edge {
    /// Builds the edge of a resolved way, or `None` if it cannot connect.
    pub fn of(way: &MemberWay<'_>) -> Option<Self> {
        if !way.way.is_connectable() {
            return None;
        }
        if way.roundabout.is_some() {
            let nodes = &way.way.nodes;
            return Some(Self::Roundabout {
                nodes: nodes[..nodes.len() - 1].to_vec(),
            });
        }
        if way.is_route_oneway() {
            return Some(Self::Oneway {
                entry: way.entry()?,
                exit: way.exit()?,
            });
        }
        Some(Self::Bidirectional {
            first: way.first()?,
            last: way.last()?,
        })
    }

    pub fn is_oneway(&self) -> bool {
        matches!(self, Self::Oneway { .. })
    }

    /// Departure and arrival node of a one-way edge. `mirrored` walks it
    /// against its travel direction.
    pub fn oneway_ends(&self, mirrored: bool) -> Option<(NodeId, NodeId)> {
        match *self {
            Self::Oneway { entry, exit } if mirrored => Some((exit, entry)),
            Self::Oneway { entry, exit } => Some((entry, exit)),
            Self::Bidirectional { .. } | Self::Roundabout { .. } => None,
        }
    }

    /// Nodes a walk may start from if nothing else touches them.
    pub fn departures(&self) -> Vec<NodeId> {
        match *self {
            Self::Bidirectional { first, last } => vec![first, last],
            Self::Oneway { entry, .. } => vec![entry],
            Self::Roundabout { .. } => Vec::new(),
        }
    }

    fn nodes(&self) -> Vec<NodeId> {
        match self {
            Self::Bidirectional { first, last } => vec![*first, *last],
            Self::Oneway { entry, exit } => vec![*entry, *exit],
            Self::Roundabout { nodes } => nodes.clone(),
        }
    }
}

/// Node to incident-way index over the sortable ways of one member list.
///
/// Ways are addressed by their position in `edges`, which follows the
/// original member order.
#[derive(Debug)]
pub(super) struct NodeMap {
    edges: Vec<Edge>,
    incident: HashMap<NodeId, Vec<usize>>,
}

impl NodeMap {
    pub fn new(edges: Vec<Edge>) -> Self {
        let mut incident: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (i, edge) in edges.iter().enumerate() {
            for node in edge.nodes() {
                let ways = incident.entry(node).or_default();
                // closed ways touch their endpoint twice
                if ways.last() != Some(&i) {
                    ways.push(i);
                }
            }
        }
        Self { edges, incident }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, way: usize) -> &Edge {
        &self.edges[way]
    }

    /// Ways touching `node`, in ascending order.
    pub fn incident(&self, node: NodeId) -> &[usize] {
        self.incident.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Groups ways sharing nodes, ordered by their earliest way. Each group
    /// is sorted ascending.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.len()];
        let mut components = Vec::new();
        for start in 0..self.len() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(way) = queue.pop_front() {
                for node in self.edges[way].nodes() {
                    for &next in self.incident(node) {
                        if !seen[next] {
                            seen[next] = true;
                            component.push(next);
                            queue.push_back(next);
                        }
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }
}
