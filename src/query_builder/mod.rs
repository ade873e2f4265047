//! Clause-by-clause Cypher query assembly.
//!
//! A [`QueryBuilder`] is driven by one fluent call chain. Clause methods never
//! fail: problems are recorded and the chain carries on with whatever text
//! could be produced. [`QueryBuilder::execute`] returns the text together with
//! a single [`BuildError`] listing everything that went wrong, in call order.
//!
//! ```
//! use cypher_builder::query_builder::{QueryBuilder, QueryPattern};
//! use cypher_builder::render::{Comparison, Condition, Node, ProjectionItem};
//!
//! let (query, err) = QueryBuilder::new()
//!     .match_(&[QueryPattern::node(Node::new("u").label("User"))])
//!     .where_(&[Condition::new("u.age", Comparison::GreaterThan, "30")])
//!     .return_(&[ProjectionItem::new("u.name")])
//!     .execute();
//!
//! assert!(err.is_none());
//! assert_eq!(query, "MATCH (u:User)\nWHERE u.age > 30\nRETURN u.name");
//! ```
//!
//! The builder has no internal synchronization. Each method takes it by
//! value, so a chain always owns it exclusively; sharing one across threads
//! needs a lock supplied by the caller.

mod compose;
pub(crate) mod errors;
mod pattern;
mod subquery;

use serde::{Deserialize, Serialize};

use crate::render::{OrderBy, RemoveTarget, ToCypher};
pub use errors::{BuildError, QueryBuilderError};
use errors::ErrorLog;
pub use pattern::QueryPattern;

/// Clauses whose content is a list of patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternClause {
    Match,
    OptionalMatch,
    Merge,
    Create,
}

impl PatternClause {
    pub fn keyword(self) -> &'static str {
        match self {
            PatternClause::Match => "MATCH",
            PatternClause::OptionalMatch => "OPTIONAL MATCH",
            PatternClause::Merge => "MERGE",
            PatternClause::Create => "CREATE",
        }
    }
}

#[derive(Debug, Default)]
pub struct QueryBuilder {
    query: String,
    errors: ErrorLog,
}

impl QueryBuilder {
    pub fn new() -> Self {
        QueryBuilder::default()
    }

    /// Text assembled so far.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of errors recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn append(&mut self, keyword: &str, text: &str) {
        log::debug!("appending {} clause", keyword);
        self.query.push_str(text);
    }

    /// Emit `KEYWORD <patterns>\n` for any pattern clause.
    pub fn pattern_clause(mut self, clause: PatternClause, patterns: &[QueryPattern]) -> Self {
        let keyword = clause.keyword();
        if patterns.is_empty() {
            self.errors.record(QueryBuilderError::EmptyPatterns(keyword));
            return self;
        }

        let mut text = format!("{} ", keyword);
        for pattern in patterns {
            text.push_str(&pattern.resolve(&mut self.errors));
        }
        text.push('\n');
        self.append(keyword, &text);
        self
    }

    /// `MATCH` clause. Patterns are concatenated, so a partial relationship
    /// continues the pattern before it.
    pub fn match_(self, patterns: &[QueryPattern]) -> Self {
        self.pattern_clause(PatternClause::Match, patterns)
    }

    pub fn optional_match(self, patterns: &[QueryPattern]) -> Self {
        self.pattern_clause(PatternClause::OptionalMatch, patterns)
    }

    pub fn merge(self, patterns: &[QueryPattern]) -> Self {
        self.pattern_clause(PatternClause::Merge, patterns)
    }

    pub fn create(self, patterns: &[QueryPattern]) -> Self {
        self.pattern_clause(PatternClause::Create, patterns)
    }

    /// `DELETE` or `DETACH DELETE` clause.
    pub fn delete(mut self, detach: bool, target: &RemoveTarget) -> Self {
        let keyword = if detach { "DETACH DELETE" } else { "DELETE" };
        if target.is_empty() {
            self.errors.record(QueryBuilderError::EmptyClause(keyword));
            return self;
        }

        let text = format!(
            "{} {}\n",
            keyword,
            compose::concat(std::slice::from_ref(target), &mut self.errors)
        );
        self.append(keyword, &text);
        self
    }

    /// `WHERE` clause. Conditions are concatenated as-is; each one after the
    /// first is expected to carry its own `AND`/`OR` connector.
    pub fn where_<C: ToCypher>(mut self, conditions: &[C]) -> Self {
        if conditions.is_empty() {
            self.errors.record(QueryBuilderError::EmptyClause("WHERE"));
            return self;
        }

        let text = format!("WHERE {}\n", compose::concat(conditions, &mut self.errors));
        self.append("WHERE", &text);
        self
    }

    /// `RETURN` clause, items separated by `", "`.
    pub fn return_<C: ToCypher>(self, items: &[C]) -> Self {
        self.projection("RETURN", items)
    }

    /// `WITH` clause, items separated by `", "`.
    pub fn with<C: ToCypher>(self, items: &[C]) -> Self {
        self.projection("WITH", items)
    }

    fn projection<C: ToCypher>(mut self, keyword: &'static str, items: &[C]) -> Self {
        if items.is_empty() {
            self.errors.record(QueryBuilderError::EmptyClause(keyword));
            return self;
        }

        let text = format!("{} {}\n", keyword, compose::comma_list(items, &mut self.errors));
        self.append(keyword, &text);
        self
    }

    /// `REMOVE` clause.
    pub fn remove(mut self, target: &RemoveTarget) -> Self {
        if target.is_empty() {
            self.errors.record(QueryBuilderError::EmptyClause("REMOVE"));
            return self;
        }

        let rendered = compose::concat(std::slice::from_ref(target), &mut self.errors);
        let text = format!("REMOVE {}\n", compose::trim_separator(&rendered));
        self.append("REMOVE", &text);
        self
    }

    /// `UNION` or `UNION ALL`.
    pub fn union(mut self, all: bool) -> Self {
        let keyword = if all { "UNION ALL" } else { "UNION" };
        self.append(keyword, &format!("{}\n", keyword));
        self
    }

    /// `ORDER BY` clause.
    pub fn order_by(mut self, order: &OrderBy) -> Self {
        if order.is_empty() {
            self.errors.record(QueryBuilderError::EmptyClause("ORDER BY"));
            return self;
        }

        let text = format!(
            "ORDER BY {}\n",
            compose::concat(std::slice::from_ref(order), &mut self.errors)
        );
        self.append("ORDER BY", &text);
        self
    }

    /// `LIMIT` clause. The value is written as given, negative or not.
    pub fn limit(mut self, limit: i64) -> Self {
        self.append("LIMIT", &format!("LIMIT {}\n", limit));
        self
    }

    /// Embed a nested query as a `CALL { ... }` block.
    ///
    /// The nested builder is finalized here. If it recorded errors, its
    /// composite error is added to this builder as a single entry.
    pub fn call(mut self, nested: QueryBuilder) -> Self {
        let (text, err) = nested.execute();
        if let Some(err) = err {
            self.errors.record(err);
        }

        let block = subquery::call_block(&text);
        self.append("CALL", &block);
        self
    }

    /// Finalize the query.
    ///
    /// Trims one trailing line terminator and returns the text along with
    /// the composite error, if anything was recorded. The text is returned
    /// either way and may have gaps where rendering failed.
    pub fn execute(self) -> (String, Option<BuildError>) {
        let QueryBuilder { mut query, errors } = self;
        if query.ends_with('\n') {
            query.pop();
        }
        log::debug!("query finalized with {} error(s)", errors.len());
        (query, errors.finish())
    }

    /// Like [`execute`](Self::execute) but discards the text on error.
    pub fn build(self) -> Result<String, BuildError> {
        match self.execute() {
            (query, None) => Ok(query),
            (_, Some(err)) => Err(err),
        }
    }
}
