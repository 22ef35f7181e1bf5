// sentieval-core/src/engines/mod.rs
//! This module contains the concrete `PolarityScorer` implementations.
//!
//! Each scorer is a separate file within this directory. To add a new
//! backend, create a new file, implement the trait, and declare it here.

pub mod valence_engine;
