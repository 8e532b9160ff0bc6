use tracing::debug;

use super::node_map::{Edge, NodeMap};
use super::role_sorters::RoleSorter;
use super::walk::Walker;
use crate::data::{DataSet, Member, RelationId};
use crate::error::Result;
use crate::operations::classify::MemberWay;
use crate::rules::RelationRules;

/// Reorders relation members so that connected ways are adjacent.
///
/// Members with a well-known role family (associated street, addresses,
/// public transport stops, restriction parts) are grouped and sorted by
/// their own rules after the remaining members. The output is always a
/// permutation of the input.
#[derive(Debug)]
pub struct MemberSequencer<'m> {
    members: &'m [Member],
    rules: RelationRules,
}

impl<'m> MemberSequencer<'m> {
    /// Creates a sequencer for a bare member list.
    #[must_use]
    pub fn new(members: &'m [Member]) -> Self {
        Self {
            members,
            rules: RelationRules::default(),
        }
    }

    /// Creates a sequencer for the members of a stored relation.
    ///
    /// # Errors
    ///
    /// Returns an error if the relation is not in the data set.
    pub fn for_relation(store: &'m DataSet, relation: RelationId) -> Result<Self> {
        Ok(Self::new(&store.relation(relation)?.members))
    }

    /// Replaces the rules used for roundabout detection.
    #[must_use]
    pub fn with_rules(mut self, rules: RelationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the members in their new order.
    #[must_use]
    pub fn execute(&self, store: &DataSet) -> Vec<Member> {
        let mut rest = Vec::new();
        let mut groups: Vec<(RoleSorter, Vec<Member>)> = Vec::new();
        for member in self.members {
            let Some(sorter) = RoleSorter::ALL
                .into_iter()
                .find(|s| s.accepts(member, self.members))
            else {
                rest.push(member.clone());
                continue;
            };
            match groups.iter_mut().find(|(s, _)| *s == sorter) {
                Some((_, group)) => group.push(member.clone()),
                None => groups.push((sorter, vec![member.clone()])),
            }
        }

        debug!(
            members = self.members.len(),
            by_role = groups.len(),
            "sequencing members"
        );
        let mut sorted = sort_by_connectivity(store, &self.rules, &rest);
        for (sorter, group) in groups {
            sorted.extend(sorter.sort(store, &self.rules, group));
        }
        sorted
    }
}

/// Orders `members` along their shared nodes.
///
/// Members that are not ways, are missing from the store or have fewer than
/// two nodes follow the sorted ways in their original order.
pub(super) fn sort_by_connectivity(
    store: &DataSet,
    rules: &RelationRules,
    members: &[Member],
) -> Vec<Member> {
    let mut edges = Vec::new();
    let mut origin = Vec::new();
    let mut unsortable = Vec::new();
    for (i, member) in members.iter().enumerate() {
        match MemberWay::resolve(store, rules, i, member).and_then(|w| Edge::of(&w)) {
            Some(edge) => {
                edges.push(edge);
                origin.push(i);
            }
            None => unsortable.push(member.clone()),
        }
    }
    if !unsortable.is_empty() {
        debug!(count = unsortable.len(), "appending members without geometry");
    }

    let map = NodeMap::new(edges);
    Walker::new(&map)
        .order()
        .into_iter()
        .map(|way| members[origin[way]].clone())
        .chain(unsortable)
        .collect()
}
