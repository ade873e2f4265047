use serde::{Deserialize, Serialize};

use super::{render_properties, RenderError, ToCypher};

/// A node pattern such as `(u:User {id: $id})`.
///
/// All fields are optional; an empty node renders as `()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub variable: Option<String>,
    pub labels: Vec<String>,
    /// Property key and value expression pairs, in output order.
    pub properties: Vec<(String, String)>,
}

impl Node {
    pub fn new(variable: impl Into<String>) -> Self {
        Node {
            variable: Some(variable.into()),
            ..Default::default()
        }
    }

    /// A node without a variable binding.
    pub fn anonymous() -> Self {
        Node::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    fn display_name(&self) -> &str {
        self.variable.as_deref().unwrap_or("<anonymous>")
    }
}

impl ToCypher for Node {
    fn to_cypher(&self) -> Result<String, RenderError> {
        let mut out = String::from("(");
        if let Some(variable) = &self.variable {
            out.push_str(variable);
        }
        for label in &self.labels {
            if label.is_empty() {
                return Err(RenderError::EmptyLabel(self.display_name().to_string()));
            }
            out.push(':');
            out.push_str(label);
        }
        out.push_str(&render_properties(self.display_name(), &self.properties)?);
        out.push(')');
        Ok(out)
    }
}
