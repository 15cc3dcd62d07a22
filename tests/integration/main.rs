//! Cross-layer integration tests for prodsys
//!
//! Tests that verify correct interaction between multiple crates.

mod trace_output;
