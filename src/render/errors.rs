use thiserror::Error;

/// Failures reported by a [`ToCypher`](super::ToCypher) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("empty label on node '{0}'")]
    EmptyLabel(String),
    #[error("empty relationship type on relationship '{0}'")]
    EmptyRelationshipType(String),
    #[error("empty property key on '{0}'")]
    EmptyPropertyKey(String),
    #[error("empty value for property '{0}'")]
    EmptyPropertyValue(String),
    #[error("invalid hop range *{min}..{max} (min must not exceed max)")]
    InvalidHopRange { min: u32, max: u32 },
    #[error("condition has an empty left operand")]
    EmptyConditionOperand,
    #[error("operator '{0}' requires a right operand")]
    MissingRightOperand(&'static str),
    #[error("operator '{0}' does not take a right operand")]
    UnexpectedRightOperand(&'static str),
    #[error("projection item has an empty expression")]
    EmptyExpression,
    #[error("projection '{0}' has an empty alias")]
    EmptyAlias(String),
    #[error("remove item has an empty name")]
    EmptyRemoveItem,
    #[error("order by item has an empty expression")]
    EmptySortExpression,
    /// Free-form failure for renderers defined outside this crate.
    #[error("{0}")]
    Custom(String),
}

impl RenderError {
    pub fn custom(message: impl Into<String>) -> Self {
        RenderError::Custom(message.into())
    }
}
