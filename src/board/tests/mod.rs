//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fixtures.rs` - Named positions: back-rank mate, pin, promotion, blocked ray
//! - `edge_cases.rs` - Unusual positions the rules still have to handle
//! - `proptest.rs` - Property-based tests over random playouts

mod fixtures;
