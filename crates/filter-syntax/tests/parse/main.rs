//! Parser tests
//!
//! These tests verify that widget-produced JSON documents are turned into
//! filter trees, and that malformed documents are rejected with every
//! problem reported at once.

mod errors;
