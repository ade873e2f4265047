use std::fmt;

use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryBuilderError {
    #[error("{0} clause requires at least one pattern")]
    EmptyPatterns(&'static str),
    #[error("empty pattern: no node, partial relationship or full relationship given")]
    EmptyPattern,
    #[error("{0} clause is empty")]
    EmptyClause(&'static str),
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Composite error of a nested `CALL { ... }` query, kept as one entry.
    #[error(transparent)]
    Subquery(#[from] BuildError),
}

/// Every error recorded while assembling a query, in recording order.
///
/// Displays as `errors found: e1;e2 -- total errors (2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    errors: Vec<QueryBuilderError>,
}

impl BuildError {
    pub(crate) fn new(errors: Vec<QueryBuilderError>) -> Self {
        BuildError { errors }
    }

    pub fn errors(&self) -> &[QueryBuilderError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errors found: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", err)?;
        }
        write!(f, " -- total errors ({})", self.errors.len())
    }
}

impl std::error::Error for BuildError {}

/// Append-only log of errors recorded during assembly.
#[derive(Debug, Default)]
pub(crate) struct ErrorLog {
    errors: Vec<QueryBuilderError>,
}

impl ErrorLog {
    pub(crate) fn record(&mut self, err: impl Into<QueryBuilderError>) {
        let err = err.into();
        log::warn!("query builder error #{}: {}", self.errors.len() + 1, err);
        self.errors.push(err);
    }

    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Build the composite error, or `None` when nothing was recorded.
    pub(crate) fn finish(self) -> Option<BuildError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(BuildError::new(self.errors))
        }
    }
}
