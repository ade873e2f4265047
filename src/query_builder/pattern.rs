use serde::{Deserialize, Serialize};

use super::errors::{ErrorLog, QueryBuilderError};
use crate::render::{FullRelationship, Node, PartialRelationship, ToCypher};

/// One pattern of a MATCH, OPTIONAL MATCH, MERGE or CREATE clause.
///
/// Exactly one shape is meant to be set. Presence is explicit, so an empty
/// node `()` is a valid pattern. When several shapes are set the node wins,
/// then the partial relationship, then the full relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPattern {
    pub node: Option<Node>,
    pub partial_relationship: Option<PartialRelationship>,
    pub full_relationship: Option<FullRelationship>,
}

impl QueryPattern {
    pub fn node(node: Node) -> Self {
        QueryPattern {
            node: Some(node),
            ..Default::default()
        }
    }

    pub fn partial(relationship: PartialRelationship) -> Self {
        QueryPattern {
            partial_relationship: Some(relationship),
            ..Default::default()
        }
    }

    pub fn full(relationship: FullRelationship) -> Self {
        QueryPattern {
            full_relationship: Some(relationship),
            ..Default::default()
        }
    }

    /// The shape that will be rendered, if any.
    pub fn selected(&self) -> Option<&dyn ToCypher> {
        if let Some(node) = &self.node {
            return Some(node as &dyn ToCypher);
        }
        if let Some(partial) = &self.partial_relationship {
            return Some(partial as &dyn ToCypher);
        }
        if let Some(full) = &self.full_relationship {
            return Some(full as &dyn ToCypher);
        }
        None
    }

    /// Render the selected shape, recording any failure.
    ///
    /// Returns an empty string when nothing is set or rendering fails.
    pub(crate) fn resolve(&self, errors: &mut ErrorLog) -> String {
        let Some(shape) = self.selected() else {
            errors.record(QueryBuilderError::EmptyPattern);
            return String::new();
        };

        match shape.to_cypher() {
            Ok(text) => text,
            Err(e) => {
                errors.record(e);
                String::new()
            }
        }
    }
}

impl From<Node> for QueryPattern {
    fn from(node: Node) -> Self {
        QueryPattern::node(node)
    }
}

impl From<PartialRelationship> for QueryPattern {
    fn from(relationship: PartialRelationship) -> Self {
        QueryPattern::partial(relationship)
    }
}

impl From<FullRelationship> for QueryPattern {
    fn from(relationship: FullRelationship) -> Self {
        QueryPattern::full(relationship)
    }
}
