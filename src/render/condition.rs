use serde::{Deserialize, Serialize};

use super::{RenderError, ToCypher};

/// Boolean connector placed in front of a condition.
///
/// The WHERE clause concatenates conditions without a separator, so every
/// condition after the first carries its own connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOperator {
    And,
    Or,
    Xor,
}

impl BooleanOperator {
    fn as_str(self) -> &'static str {
        match self {
            BooleanOperator::And => " AND ",
            BooleanOperator::Or => " OR ",
            BooleanOperator::Xor => " XOR ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    In,
    StartsWith,
    EndsWith,
    Contains,
    RegexMatch,
    IsNull,
    IsNotNull,
}

impl Comparison {
    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "<>",
            Comparison::LessThan => "<",
            Comparison::LessThanEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterThanEqual => ">=",
            Comparison::In => "IN",
            Comparison::StartsWith => "STARTS WITH",
            Comparison::EndsWith => "ENDS WITH",
            Comparison::Contains => "CONTAINS",
            Comparison::RegexMatch => "=~",
            Comparison::IsNull => "IS NULL",
            Comparison::IsNotNull => "IS NOT NULL",
        }
    }

    /// Postfix operators that take no right operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Comparison::IsNull | Comparison::IsNotNull)
    }
}

/// A single WHERE predicate such as ` AND NOT u.age >= 18`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub connector: Option<BooleanOperator>,
    #[serde(default)]
    pub negated: bool,
    pub left: String,
    pub operator: Comparison,
    #[serde(default)]
    pub right: Option<String>,
}

impl Condition {
    pub fn new(left: impl Into<String>, operator: Comparison, right: impl Into<String>) -> Self {
        Condition {
            connector: None,
            negated: false,
            left: left.into(),
            operator,
            right: Some(right.into()),
        }
    }

    /// A postfix predicate such as `n.email IS NULL`.
    pub fn unary(left: impl Into<String>, operator: Comparison) -> Self {
        Condition {
            connector: None,
            negated: false,
            left: left.into(),
            operator,
            right: None,
        }
    }

    pub fn and(mut self) -> Self {
        self.connector = Some(BooleanOperator::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.connector = Some(BooleanOperator::Or);
        self
    }

    pub fn xor(mut self) -> Self {
        self.connector = Some(BooleanOperator::Xor);
        self
    }

    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl ToCypher for Condition {
    fn to_cypher(&self) -> Result<String, RenderError> {
        if self.left.is_empty() {
            return Err(RenderError::EmptyConditionOperand);
        }

        let mut out = String::new();
        if let Some(connector) = self.connector {
            out.push_str(connector.as_str());
        }
        if self.negated {
            out.push_str("NOT ");
        }
        out.push_str(&self.left);
        out.push(' ');
        out.push_str(self.operator.as_str());

        match (&self.right, self.operator.is_unary()) {
            (Some(_), true) => {
                return Err(RenderError::UnexpectedRightOperand(self.operator.as_str()))
            }
            (None, false) => return Err(RenderError::MissingRightOperand(self.operator.as_str())),
            (Some(right), false) if right.is_empty() => {
                return Err(RenderError::MissingRightOperand(self.operator.as_str()))
            }
            (Some(right), false) => {
                out.push(' ');
                out.push_str(right);
            }
            (None, true) => {}
        }

        Ok(out)
    }
}
