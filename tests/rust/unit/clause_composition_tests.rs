//! End-to-end tests for query assembly through the public API
//!
//! Covers clause layout, subquery nesting and deferred error reporting.

use cypher_builder::query_builder::{QueryBuilder, QueryBuilderError, QueryPattern};
use cypher_builder::render::{
    Comparison, Condition, Direction, FullRelationship, Hops, Node, OrderBy,
    PartialRelationship, ProjectionItem, Relationship, RemoveTarget, RenderError,
};

fn user(variable: &str) -> Node {
    Node::new(variable).label("User")
}

#[test]
fn test_friends_of_friends_query() {
    let (query, err) = QueryBuilder::new()
        .match_(&[
            QueryPattern::node(user("me").property("id", "$id")),
            QueryPattern::partial(PartialRelationship::new(
                Relationship::anonymous()
                    .rel_type("FRIEND")
                    .hops(Hops::range(2, 2)),
                user("fof"),
            )),
        ])
        .where_(&[
            Condition::new("fof.id", Comparison::NotEqual, "$id"),
            Condition::unary("fof.deleted_at", Comparison::IsNull).and(),
        ])
        .with(&[
            ProjectionItem::new("fof"),
            ProjectionItem::new("count(*)").alias("paths"),
        ])
        .order_by(&OrderBy::new().desc("paths"))
        .limit(10)
        .return_(&[ProjectionItem::new("fof.name"), ProjectionItem::new("paths")])
        .execute();

    assert!(err.is_none(), "unexpected error: {:?}", err);
    assert_eq!(
        query,
        "MATCH (me:User {id: $id})-[:FRIEND*2]->(fof:User)\n\
         WHERE fof.id <> $id AND fof.deleted_at IS NULL\n\
         WITH fof, count(*) AS paths\n\
         ORDER BY paths DESC\n\
         LIMIT 10\n\
         RETURN fof.name, paths"
    );
}

#[test]
fn test_optional_match_and_merge() {
    let (query, err) = QueryBuilder::new()
        .match_(&[QueryPattern::node(user("u"))])
        .optional_match(&[QueryPattern::full(FullRelationship::new(
            Node::new("u"),
            Relationship::new("w").rel_type("WROTE"),
            Node::new("p").label("Post"),
        ))])
        .merge(&[QueryPattern::full(FullRelationship::new(
            Node::new("u"),
            Relationship::anonymous()
                .rel_type("SEEN")
                .direction(Direction::Incoming),
            Node::new("p"),
        ))])
        .return_(&["u", "p"])
        .execute();

    assert!(err.is_none());
    assert_eq!(
        query,
        "MATCH (u:User)\n\
         OPTIONAL MATCH (u)-[w:WROTE]->(p:Post)\n\
         MERGE (u)<-[:SEEN]-(p)\n\
         RETURN u, p"
    );
}

#[test]
fn test_union_of_two_queries() {
    let (query, err) = QueryBuilder::new()
        .match_(&[QueryPattern::node(Node::new("a").label("Admin"))])
        .return_(&[ProjectionItem::new("a.name").alias("name")])
        .union(true)
        .match_(&[QueryPattern::node(Node::new("m").label("Moderator"))])
        .return_(&[ProjectionItem::new("m.name").alias("name")])
        .execute();

    assert!(err.is_none());
    assert_eq!(
        query,
        "MATCH (a:Admin)\nRETURN a.name AS name\nUNION ALL\nMATCH (m:Moderator)\nRETURN m.name AS name"
    );
}

#[test]
fn test_create_then_cleanup() {
    let (query, err) = QueryBuilder::new()
        .create(&[QueryPattern::node(
            Node::new("t").label("Temp").property("created", "timestamp()"),
        )])
        .remove(&RemoveTarget::new().labels("t", ["Temp"]))
        .delete(true, &RemoveTarget::new().variable("t"))
        .execute();

    assert!(err.is_none());
    assert_eq!(
        query,
        "CREATE (t:Temp {created: timestamp()})\nREMOVE t:Temp\nDETACH DELETE t"
    );
}

#[test]
fn test_nested_subqueries_align() {
    let innermost = QueryBuilder::new().return_(&["1 AS one"]);
    let inner = QueryBuilder::new()
        .match_(&[QueryPattern::node(Node::new("n"))])
        .call(innermost)
        .return_(&["n", "one"]);
    let (query, err) = QueryBuilder::new()
        .call(inner)
        .return_(&["count(*)"])
        .execute();

    assert!(err.is_none());
    assert_eq!(
        query,
        "CALL {\n\
         \x20 MATCH (n)\n\
         \x20 CALL {\n\
         \x20   RETURN 1 AS one\n\
         \x20 }\n\
         \x20 RETURN n, one\n\
         }\n\
         RETURN count(*)"
    );
}

#[test]
fn test_independent_errors_surface_together() {
    let (query, err) = QueryBuilder::new()
        .match_(&[])
        .match_(&[QueryPattern::default()])
        .where_(&[Condition::new("", Comparison::Equal, "1")])
        .return_::<ProjectionItem>(&[])
        .order_by(&OrderBy::new())
        .limit(3)
        .execute();

    assert_eq!(query, "MATCH \nWHERE \nLIMIT 3");

    let err = err.expect("errors should be reported");
    assert_eq!(
        err.errors(),
        &[
            QueryBuilderError::EmptyPatterns("MATCH"),
            QueryBuilderError::EmptyPattern,
            QueryBuilderError::Render(RenderError::EmptyConditionOperand),
            QueryBuilderError::EmptyClause("RETURN"),
            QueryBuilderError::EmptyClause("ORDER BY"),
        ]
    );

    let message = err.to_string();
    assert!(message.starts_with("errors found: MATCH clause requires at least one pattern;"));
    assert!(message.ends_with(" -- total errors (5)"));
    assert_eq!(message.matches(';').count(), 4);
}

#[test]
fn test_composite_error_text_for_two_errors() {
    let (_, err) = QueryBuilder::new()
        .where_::<Condition>(&[])
        .with::<ProjectionItem>(&[])
        .execute();

    let e1 = QueryBuilderError::EmptyClause("WHERE").to_string();
    let e2 = QueryBuilderError::EmptyClause("WITH").to_string();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some(format!("errors found: {};{} -- total errors (2)", e1, e2))
    );
}

#[test]
fn test_subquery_error_counts_once_in_outer_query() {
    let nested = QueryBuilder::new().match_(&[]).return_::<&str>(&[]);
    let (_, err) = QueryBuilder::new()
        .call(nested)
        .where_::<Condition>(&[])
        .execute();

    let err = err.expect("errors should be reported");
    assert_eq!(err.len(), 2);
    assert!(matches!(err.errors()[0], QueryBuilderError::Subquery(ref inner) if inner.len() == 2));
    assert!(err.to_string().ends_with(" -- total errors (2)"));
}
