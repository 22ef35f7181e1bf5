// sentieval/src/commands/mod.rs
pub mod evaluate;
