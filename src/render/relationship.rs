use serde::{Deserialize, Serialize};

use super::{render_properties, Node, RenderError, ToCypher};

/// Direction of a relationship, read left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `-[]->`
    #[default]
    Outgoing,
    /// `<-[]-`
    Incoming,
    /// `-[]-`
    Undirected,
}

/// Variable-length hop bounds (`*`, `*2`, `*1..3`, `*..5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hops {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl Hops {
    pub fn range(min: u32, max: u32) -> Self {
        Hops {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn exactly(n: u32) -> Self {
        Hops::range(n, n)
    }

    fn render(self) -> Result<String, RenderError> {
        match (self.min, self.max) {
            (None, None) => Ok("*".to_string()),
            (Some(min), Some(max)) if min > max => Err(RenderError::InvalidHopRange { min, max }),
            (Some(min), Some(max)) if min == max => Ok(format!("*{}", min)),
            (Some(min), Some(max)) => Ok(format!("*{}..{}", min, max)),
            (Some(min), None) => Ok(format!("*{}..", min)),
            (None, Some(max)) => Ok(format!("*..{}", max)),
        }
    }
}

/// The edge part of a pattern, e.g. `-[r:FOLLOWS {since: 2020}]->`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub variable: Option<String>,
    /// Alternative types, rendered as `:A|B`.
    pub types: Vec<String>,
    pub properties: Vec<(String, String)>,
    pub hops: Option<Hops>,
    pub direction: Direction,
}

impl Relationship {
    pub fn new(variable: impl Into<String>) -> Self {
        Relationship {
            variable: Some(variable.into()),
            ..Default::default()
        }
    }

    pub fn anonymous() -> Self {
        Relationship::default()
    }

    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.types.push(rel_type.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    pub fn hops(mut self, hops: Hops) -> Self {
        self.hops = Some(hops);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    fn display_name(&self) -> &str {
        self.variable.as_deref().unwrap_or("<anonymous>")
    }

    fn body(&self) -> Result<String, RenderError> {
        let mut body = String::new();
        if let Some(variable) = &self.variable {
            body.push_str(variable);
        }
        if self.types.iter().any(|t| t.is_empty()) {
            return Err(RenderError::EmptyRelationshipType(
                self.display_name().to_string(),
            ));
        }
        if !self.types.is_empty() {
            body.push(':');
            body.push_str(&self.types.join("|"));
        }
        if let Some(hops) = self.hops {
            body.push_str(&hops.render()?);
        }
        body.push_str(&render_properties(self.display_name(), &self.properties)?);
        Ok(body)
    }
}

impl ToCypher for Relationship {
    fn to_cypher(&self) -> Result<String, RenderError> {
        let body = self.body()?;
        let out = match self.direction {
            Direction::Outgoing => format!("-[{}]->", body),
            Direction::Incoming => format!("<-[{}]-", body),
            Direction::Undirected => format!("-[{}]-", body),
        };
        Ok(out)
    }
}

/// A relationship with only its far endpoint, e.g. `-[r:KNOWS]->(m)`.
///
/// Used after another pattern in the same clause, since patterns are
/// concatenated without a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialRelationship {
    pub relationship: Relationship,
    pub node: Node,
}

impl PartialRelationship {
    pub fn new(relationship: Relationship, node: Node) -> Self {
        PartialRelationship { relationship, node }
    }
}

impl ToCypher for PartialRelationship {
    fn to_cypher(&self) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}",
            self.relationship.to_cypher()?,
            self.node.to_cypher()?
        ))
    }
}

/// A relationship with both endpoints, e.g. `(a)-[r]->(b)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRelationship {
    pub from: Node,
    pub relationship: Relationship,
    pub to: Node,
}

impl FullRelationship {
    pub fn new(from: Node, relationship: Relationship, to: Node) -> Self {
        FullRelationship {
            from,
            relationship,
            to,
        }
    }
}

impl ToCypher for FullRelationship {
    fn to_cypher(&self) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            self.from.to_cypher()?,
            self.relationship.to_cypher()?,
            self.to.to_cypher()?
        ))
    }
}
