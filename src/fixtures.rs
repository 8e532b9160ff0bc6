//! Shared builders for unit tests.

#![allow(clippy::unwrap_used)]

use crate::data::{DataSet, NodeData, NodeId, WayData, WayId};
use crate::math::Point2;
use crate::operations::connection::ConnectionDescriptor;

/// A data set with a pool of numbered nodes laid out along the x axis.
pub(crate) struct Fixture {
    pub store: DataSet,
    nodes: Vec<NodeId>,
}

impl Fixture {
    /// Creates `count` nodes at `(i, 0)`.
    pub fn new(count: usize) -> Self {
        init_tracing();
        let mut store = DataSet::new();
        let nodes = (0..count)
            .map(|i| store.add_node(NodeData::new(Point2::new(f64_of(i), 0.0))))
            .collect();
        Self { store, nodes }
    }

    pub fn node(&self, i: usize) -> NodeId {
        self.nodes[i]
    }

    /// Adds an untagged way over the numbered nodes.
    pub fn way(&mut self, nodes: &[usize]) -> WayId {
        self.tagged_way(nodes, &[])
    }

    /// Adds a way over the numbered nodes with the given tags.
    pub fn tagged_way(&mut self, nodes: &[usize], tags: &[(&str, &str)]) -> WayId {
        let ids = nodes.iter().map(|&i| self.nodes[i]).collect();
        self.way_through(ids, tags)
    }

    /// Adds a way over explicit node ids with the given tags.
    pub fn way_through(&mut self, ids: Vec<NodeId>, tags: &[(&str, &str)]) -> WayId {
        let data = tags
            .iter()
            .fold(WayData::new(ids), |w, &(k, v)| w.with_tag(k, v));
        self.store.add_way(data).unwrap()
    }

    /// Adds nodes at the given coordinates and returns them as a closed ring.
    pub fn ring(&mut self, points: &[(f64, f64)]) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = points
            .iter()
            .map(|&(x, y)| {
                let id = self.store.add_node(NodeData::new(Point2::new(x, y)));
                self.nodes.push(id);
                id
            })
            .collect();
        ids.push(ids[0]);
        ids
    }

    /// Reverses the stored node order of a way.
    pub fn reverse(&mut self, way: WayId) {
        self.store.way_mut(way).unwrap().nodes.reverse();
    }
}

/// Renders descriptors the way a relation editor labels them.
pub(crate) fn labels(descriptors: &[ConnectionDescriptor]) -> Vec<String> {
    descriptors.iter().map(ToString::to_string).collect()
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(clippy::cast_precision_loss)]
fn f64_of(i: usize) -> f64 {
    i as f64
}
