use crate::data::{has_tag, Tags};
use crate::error::{Result, RulesError};

/// Default upper bound (exclusive) on the node count of a roundabout way.
pub const DEFAULT_MAX_ROUNDABOUT_NODES: usize = 200;

/// Route types whose members ignore `oneway` tags by default.
pub const DEFAULT_ONEWAY_EXEMPT_ROUTES: [&str; 3] = ["hiking", "foot", "horse"];

/// Tunable parameters shared by the connection analyzer and the sequencer.
#[derive(Debug, Clone)]
pub struct RelationRules {
    max_roundabout_nodes: usize,
    oneway_exempt_routes: Vec<String>,
}

impl Default for RelationRules {
    fn default() -> Self {
        Self {
            max_roundabout_nodes: DEFAULT_MAX_ROUNDABOUT_NODES,
            oneway_exempt_routes: DEFAULT_ONEWAY_EXEMPT_ROUTES
                .iter()
                .map(|&r| r.to_owned())
                .collect(),
        }
    }
}

impl RelationRules {
    /// Creates the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusive upper bound on roundabout node counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `max` cannot admit a ring of three nodes plus the
    /// closing node.
    pub fn with_max_roundabout_nodes(mut self, max: usize) -> Result<Self> {
        if max < 5 {
            return Err(RulesError::InvalidParameters(format!(
                "max_roundabout_nodes must be at least 5, got {max}"
            ))
            .into());
        }
        self.max_roundabout_nodes = max;
        Ok(self)
    }

    /// Adds a route type whose members ignore `oneway` tags.
    #[must_use]
    pub fn with_oneway_exempt_route(mut self, route: &str) -> Self {
        if !self.oneway_exempt_routes.iter().any(|r| r == route) {
            self.oneway_exempt_routes.push(route.to_owned());
        }
        self
    }

    /// Clears the list of oneway-exempt route types.
    #[must_use]
    pub fn without_oneway_exemptions(mut self) -> Self {
        self.oneway_exempt_routes.clear();
        self
    }

    /// Returns the exclusive upper bound on roundabout node counts.
    #[must_use]
    pub fn max_roundabout_nodes(&self) -> usize {
        self.max_roundabout_nodes
    }

    /// Returns `true` if a relation with these tags ignores `oneway` tags.
    #[must_use]
    pub fn ignores_oneway(&self, relation_tags: &Tags) -> bool {
        has_tag(relation_tags, "type", &["route"])
            && relation_tags
                .get("route")
                .is_some_and(|route| self.oneway_exempt_routes.iter().any(|r| r == route))
    }
}
