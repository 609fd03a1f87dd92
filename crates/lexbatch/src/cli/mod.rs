//! CLI module for lexbatch
//!
//! Argument handling, error rendering and stdout reporting for the `train`
//! and `test` commands. The pipeline itself lives in the library.

pub mod error;
pub mod output;
pub mod run;
