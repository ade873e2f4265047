//! Renderers defined outside the crate plug into the builder through `ToCypher`

use cypher_builder::{QueryBuilder, QueryBuilderError, RenderError, ToCypher};

/// Renders a parameterised IN-list filter.
struct InParam {
    property: &'static str,
    param: &'static str,
}

impl ToCypher for InParam {
    fn to_cypher(&self) -> Result<String, RenderError> {
        if self.param.is_empty() {
            return Err(RenderError::custom(format!(
                "missing parameter name for {}",
                self.property
            )));
        }
        Ok(format!("{} IN ${}", self.property, self.param))
    }
}

#[test]
fn test_custom_condition_renders() {
    let (query, err) = QueryBuilder::new()
        .where_(&[InParam {
            property: "n.id",
            param: "ids",
        }])
        .execute();

    assert!(err.is_none());
    assert_eq!(query, "WHERE n.id IN $ids");
}

#[test]
fn test_custom_failure_is_reported_verbatim() {
    let (query, err) = QueryBuilder::new()
        .where_(&[InParam {
            property: "n.id",
            param: "",
        }])
        .execute();

    assert_eq!(query, "WHERE ");
    let err = err.expect("custom failure should be reported");
    assert_eq!(
        err.errors(),
        &[QueryBuilderError::Render(RenderError::Custom(
            "missing parameter name for n.id".to_string()
        ))]
    );
    assert_eq!(
        err.to_string(),
        "errors found: missing parameter name for n.id -- total errors (1)"
    );
}

#[test]
fn test_heterogeneous_items() {
    let filter = InParam {
        property: "n.id",
        param: "ids",
    };
    let items: [Box<dyn ToCypher>; 2] = [Box::new("n.active = true"), Box::new(filter)];
    let (query, _) = QueryBuilder::new().where_(&items).execute();
    assert_eq!(query, "WHERE n.active = truen.id IN $ids");
}
