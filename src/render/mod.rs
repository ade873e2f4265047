//! Renderers that turn pattern, filter and projection descriptions into Cypher text.
//!
//! Everything the query builder consumes goes through the [`ToCypher`] trait.
//! The types in this module are the default implementations; callers can plug
//! in their own by implementing the trait. Values are inserted verbatim: no
//! quoting or escaping happens here.

pub mod condition;
pub(crate) mod errors;
pub mod node;
pub mod projection;
pub mod relationship;

use std::fmt::Write as _;

pub use condition::{BooleanOperator, Comparison, Condition};
pub use errors::RenderError;
pub use node::Node;
pub use projection::{OrderBy, ProjectionItem, RemoveItem, RemoveTarget, SortOrder};
pub use relationship::{Direction, FullRelationship, Hops, PartialRelationship, Relationship};

/// Render a description into Cypher text, or fail with a description of why.
pub trait ToCypher {
    fn to_cypher(&self) -> Result<String, RenderError>;
}

impl<T: ToCypher + ?Sized> ToCypher for &T {
    fn to_cypher(&self) -> Result<String, RenderError> {
        (**self).to_cypher()
    }
}

impl<T: ToCypher + ?Sized> ToCypher for Box<T> {
    fn to_cypher(&self) -> Result<String, RenderError> {
        self.as_ref().to_cypher()
    }
}

/// Raw text passes through untouched.
impl ToCypher for str {
    fn to_cypher(&self) -> Result<String, RenderError> {
        Ok(self.to_string())
    }
}

impl ToCypher for String {
    fn to_cypher(&self) -> Result<String, RenderError> {
        Ok(self.clone())
    }
}

/// Render a property map as ` {k: v, k2: v2}`, or nothing when empty.
///
/// `owner` names the node or relationship in error messages.
pub(crate) fn render_properties(
    owner: &str,
    properties: &[(String, String)],
) -> Result<String, RenderError> {
    if properties.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::from(" {");
    for (i, (key, value)) in properties.iter().enumerate() {
        if key.is_empty() {
            return Err(RenderError::EmptyPropertyKey(owner.to_string()));
        }
        if value.is_empty() {
            return Err(RenderError::EmptyPropertyValue(key.clone()));
        }
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{}: {}", key, value);
    }
    out.push('}');
    Ok(out)
}
