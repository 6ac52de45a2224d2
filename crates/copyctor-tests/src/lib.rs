//! Fixtures exercising `#[derive(CopyConstructor)]` end to end.

pub mod fixture;
