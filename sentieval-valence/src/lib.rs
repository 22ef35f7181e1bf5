// sentieval-valence/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod lexicon;
pub mod tokens;
pub mod heuristics;
pub mod scoring;
pub mod engine;

pub use engine::SentimentAnalyzer;
pub use lexicon::{Lexicon, LexiconError};
pub use scoring::PolarityScores;

/// Common type definitions
pub type Valence = f64;
