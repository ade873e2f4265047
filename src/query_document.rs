//! YAML description of a query, replayed clause by clause onto a [`QueryBuilder`].
//!
//! ```yaml
//! clauses:
//!   - clause: match
//!     patterns:
//!       - node: { variable: u, labels: [User] }
//!   - clause: return
//!     items:
//!       - expression: u.name
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::query_builder::{PatternClause, QueryBuilder, QueryPattern};
use crate::render::{Condition, OrderBy, ProjectionItem, RemoveTarget};

#[derive(Debug, Error)]
pub enum QueryDocumentError {
    #[error("Failed to read query document: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse query document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid query document: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("CALL subqueries nested {depth} deep (maximum {max})")]
    NestingTooDeep { depth: u32, max: u32 },
}

/// One clause of a query document, tagged by the `clause` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "clause", rename_all = "snake_case")]
pub enum ClauseSpec {
    Match {
        patterns: Vec<QueryPattern>,
    },
    OptionalMatch {
        patterns: Vec<QueryPattern>,
    },
    Merge {
        patterns: Vec<QueryPattern>,
    },
    Create {
        patterns: Vec<QueryPattern>,
    },
    Delete {
        #[serde(default)]
        detach: bool,
        target: RemoveTarget,
    },
    Where {
        conditions: Vec<Condition>,
    },
    Return {
        items: Vec<ProjectionItem>,
    },
    With {
        items: Vec<ProjectionItem>,
    },
    Remove {
        target: RemoveTarget,
    },
    Union {
        #[serde(default)]
        all: bool,
    },
    OrderBy {
        order: OrderBy,
    },
    Limit {
        value: i64,
    },
    Call {
        subquery: QueryDocument,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QueryDocument {
    #[validate(length(min = 1, message = "query document must contain at least one clause"))]
    pub clauses: Vec<ClauseSpec>,
}

impl QueryDocument {
    /// Load a query document from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, QueryDocumentError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a query document from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, QueryDocumentError> {
        let document: QueryDocument = serde_yaml::from_str(yaml)?;
        document.check()?;
        Ok(document)
    }

    /// Validate this document and every nested subquery document.
    pub fn check(&self) -> Result<(), QueryDocumentError> {
        self.validate()?;
        for clause in &self.clauses {
            if let ClauseSpec::Call { subquery } = clause {
                subquery.check()?;
            }
        }
        Ok(())
    }

    /// Deepest level of `CALL` nesting; a document without subqueries is 0.
    pub fn call_depth(&self) -> u32 {
        self.clauses
            .iter()
            .filter_map(|clause| match clause {
                ClauseSpec::Call { subquery } => Some(subquery.call_depth() + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn ensure_call_depth(&self, max: u32) -> Result<(), QueryDocumentError> {
        let depth = self.call_depth();
        if depth > max {
            return Err(QueryDocumentError::NestingTooDeep { depth, max });
        }
        Ok(())
    }

    /// Replay every clause, in order, onto `builder`.
    pub fn apply(&self, builder: QueryBuilder) -> QueryBuilder {
        self.clauses.iter().fold(builder, |qb, clause| {
            log::debug!("replaying {} clause", clause_name(clause));
            match clause {
                ClauseSpec::Match { patterns } => qb.pattern_clause(PatternClause::Match, patterns),
                ClauseSpec::OptionalMatch { patterns } => {
                    qb.pattern_clause(PatternClause::OptionalMatch, patterns)
                }
                ClauseSpec::Merge { patterns } => qb.pattern_clause(PatternClause::Merge, patterns),
                ClauseSpec::Create { patterns } => {
                    qb.pattern_clause(PatternClause::Create, patterns)
                }
                ClauseSpec::Delete { detach, target } => qb.delete(*detach, target),
                ClauseSpec::Where { conditions } => qb.where_(conditions),
                ClauseSpec::Return { items } => qb.return_(items),
                ClauseSpec::With { items } => qb.with(items),
                ClauseSpec::Remove { target } => qb.remove(target),
                ClauseSpec::Union { all } => qb.union(*all),
                ClauseSpec::OrderBy { order } => qb.order_by(order),
                ClauseSpec::Limit { value } => qb.limit(*value),
                ClauseSpec::Call { subquery } => qb.call(subquery.apply(QueryBuilder::new())),
            }
        })
    }

    /// Build a fresh query from this document.
    pub fn to_builder(&self) -> QueryBuilder {
        self.apply(QueryBuilder::new())
    }
}

fn clause_name(clause: &ClauseSpec) -> &'static str {
    match clause {
        ClauseSpec::Match { .. } => "match",
        ClauseSpec::OptionalMatch { .. } => "optional_match",
        ClauseSpec::Merge { .. } => "merge",
        ClauseSpec::Create { .. } => "create",
        ClauseSpec::Delete { .. } => "delete",
        ClauseSpec::Where { .. } => "where",
        ClauseSpec::Return { .. } => "return",
        ClauseSpec::With { .. } => "with",
        ClauseSpec::Remove { .. } => "remove",
        ClauseSpec::Union { .. } => "union",
        ClauseSpec::OrderBy { .. } => "order_by",
        ClauseSpec::Limit { .. } => "limit",
        ClauseSpec::Call { .. } => "call",
    }
}
