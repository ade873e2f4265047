//! cypher-builder - Clause-by-clause Cypher query assembly
//!
//! This crate builds Cypher statement text without string concatenation:
//! - Pattern, filter and projection renderers behind one trait
//! - A fluent query builder with per-clause separator rules
//! - `CALL { ... }` subquery embedding with re-indentation
//! - Deferred error collection reported once at the end
//! - YAML query documents for the command line tool

pub mod config;
pub mod query_builder;
pub mod query_document;
pub mod render;

pub use query_builder::{BuildError, QueryBuilder, QueryBuilderError, QueryPattern};
pub use render::{RenderError, ToCypher};
