// sentieval/src/ui/mod.rs
//! Terminal rendering for reports and status messages.

pub mod output_format;
pub mod report;
