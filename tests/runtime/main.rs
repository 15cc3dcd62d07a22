//! Integration tests for Layer 3: Runtime
//!
//! Tests for the file readers and the session that ties them together.

mod readers;
