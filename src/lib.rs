//! prodsys - Forward-chaining production system
//!
//! This crate re-exports all layers of the prodsys workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: prodsys_runtime    - File readers, output writers, CLI
//! Layer 2: prodsys_engine     - Matching, conflict sets, resolution, inference loop
//! Layer 1: prodsys_debug      - Reasoning traces, resolution summaries
//! Layer 0: prodsys_foundation - Facts, rules, configuration, errors
//! ```

pub use prodsys_debug as debug;
pub use prodsys_engine as engine;
pub use prodsys_foundation as foundation;
pub use prodsys_runtime as runtime;
