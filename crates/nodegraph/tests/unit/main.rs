//! Integration tests for the public nodegraph API.


mod query_builder_test;
mod traversal_test;
