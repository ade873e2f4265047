mod clause_composition_tests;
mod custom_renderer_tests;
mod query_document_tests;
