//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, knowledge-base validation, and working memory.

mod knowledge;
mod memory;
