// sentieval/src/lib.rs
//! # Sentieval CLI Application
//!
//! This crate provides the command-line front end for `sentieval-core`: flag
//! parsing, logger setup, the evaluate command and report rendering.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::evaluate::{run_evaluate, EvaluateOptions, OutputMode};
