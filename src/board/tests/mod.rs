//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-piece movement rules and blocking
//! - `check.rs` - Check detection and self-check simulation
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `proptest.rs` - Property-based tests

mod check;
mod make_unmake;
