//! File readers, output writers, run reports, and the prodsys CLI.
//!
//! This crate provides:
//! - [`Tokenizer`] - Position-tracking whitespace tokenizer
//! - [`reader`] - Configuration, knowledge-base, and facts file readers
//! - [`Session`] - Load inputs, run inference, write outputs
//! - [`serialize`] - JSON run reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod output;
pub mod reader;
pub mod serialize;
pub mod session;
pub mod tokenizer;

pub use output::{OutputPaths, write_outputs};
pub use session::{RunOptions, Session, run_files};
pub use tokenizer::{Token, Tokenizer};
