//! Loading query documents from disk

use std::io::Write;

use cypher_builder::query_document::{QueryDocument, QueryDocumentError};

fn write_document(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_document_from_file() {
    let file = write_document(
        r#"
clauses:
  - clause: merge
    patterns:
      - node:
          variable: t
          labels: [Tag]
          properties:
            - [name, $name]
  - clause: return
    items:
      - expression: t
"#,
    );

    let document = QueryDocument::from_yaml_file(file.path()).expect("Failed to load document");
    let query = document.to_builder().build().expect("query should build");
    assert_eq!(query, "MERGE (t:Tag {name: $name})\nRETURN t");
}

#[test]
fn test_missing_file() {
    let result = QueryDocument::from_yaml_file("/nonexistent/query.yaml");
    assert!(matches!(result, Err(QueryDocumentError::Read(_))));
}

#[test]
fn test_malformed_yaml() {
    let file = write_document("clauses: [\n");
    let result = QueryDocument::from_yaml_file(file.path());
    assert!(matches!(result, Err(QueryDocumentError::Parse(_))));
}
