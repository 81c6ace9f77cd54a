//! CLI module for the jdskill command-line interface.
//!
//! Command handlers build the pipeline from the loaded configuration, run
//! it, and hand the result to the output module for text or JSON printing.

mod commands;
mod output;
pub mod types;

pub use commands::*;
