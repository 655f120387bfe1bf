//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - mate, stalemate and rule-boundary positions
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;
