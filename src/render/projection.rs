//! RETURN/WITH items, REMOVE/DELETE targets and ORDER BY descriptions.

use serde::{Deserialize, Serialize};

use super::{RenderError, ToCypher};

/// One RETURN or WITH item: `expr` or `expr AS alias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionItem {
    pub expression: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl ProjectionItem {
    pub fn new(expression: impl Into<String>) -> Self {
        ProjectionItem {
            expression: expression.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl ToCypher for ProjectionItem {
    fn to_cypher(&self) -> Result<String, RenderError> {
        if self.expression.is_empty() {
            return Err(RenderError::EmptyExpression);
        }
        match &self.alias {
            Some(alias) if alias.is_empty() => {
                Err(RenderError::EmptyAlias(self.expression.clone()))
            }
            Some(alias) => Ok(format!("{} AS {}", self.expression, alias)),
            None => Ok(self.expression.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveItem {
    /// A bound variable, as used by DELETE.
    Variable(String),
    /// `n.prop`
    Property { variable: String, key: String },
    /// `n:A:B`
    Labels { variable: String, labels: Vec<String> },
}

impl RemoveItem {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            RemoveItem::Variable(variable) if variable.is_empty() => {
                Err(RenderError::EmptyRemoveItem)
            }
            RemoveItem::Variable(variable) => Ok(variable.clone()),
            RemoveItem::Property { variable, key } => {
                if variable.is_empty() || key.is_empty() {
                    return Err(RenderError::EmptyRemoveItem);
                }
                Ok(format!("{}.{}", variable, key))
            }
            RemoveItem::Labels { variable, labels } => {
                if variable.is_empty() || labels.is_empty() || labels.iter().any(|l| l.is_empty())
                {
                    return Err(RenderError::EmptyRemoveItem);
                }
                Ok(format!("{}:{}", variable, labels.join(":")))
            }
        }
    }
}

/// Targets of a REMOVE or DELETE clause, rendered comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTarget {
    pub items: Vec<RemoveItem>,
}

impl RemoveTarget {
    pub fn new() -> Self {
        RemoveTarget::default()
    }

    pub fn variable(mut self, variable: impl Into<String>) -> Self {
        self.items.push(RemoveItem::Variable(variable.into()));
        self
    }

    pub fn property(mut self, variable: impl Into<String>, key: impl Into<String>) -> Self {
        self.items.push(RemoveItem::Property {
            variable: variable.into(),
            key: key.into(),
        });
        self
    }

    pub fn labels<I, S>(mut self, variable: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.push(RemoveItem::Labels {
            variable: variable.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ToCypher for RemoveTarget {
    fn to_cypher(&self) -> Result<String, RenderError> {
        let rendered = self
            .items
            .iter()
            .map(RemoveItem::render)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join(", "))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// ORDER BY description: expressions with their sort order.
///
/// Ascending order is the Cypher default and is not written out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub items: Vec<(String, SortOrder)>,
}

impl OrderBy {
    pub fn new() -> Self {
        OrderBy::default()
    }

    pub fn asc(mut self, expression: impl Into<String>) -> Self {
        self.items.push((expression.into(), SortOrder::Asc));
        self
    }

    pub fn desc(mut self, expression: impl Into<String>) -> Self {
        self.items.push((expression.into(), SortOrder::Desc));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ToCypher for OrderBy {
    fn to_cypher(&self) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(self.items.len());
        for (expression, order) in &self.items {
            if expression.is_empty() {
                return Err(RenderError::EmptySortExpression);
            }
            match order {
                SortOrder::Asc => parts.push(expression.clone()),
                SortOrder::Desc => parts.push(format!("{} DESC", expression)),
            }
        }
        Ok(parts.join(", "))
    }
}
