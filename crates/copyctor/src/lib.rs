//! ## Crate layout
//! - `core`: the policy resolution and constructor synthesis engine.
//! - `CopyConstructor`: derive macro generating `copy_from` for Rust structs.
//!
//! Hosts other than the derive implement `core::source::ClassSource` over their
//! own declaration model and call `core::generate`.

pub use copyctor_core as core;
pub use copyctor_derive::CopyConstructor;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::CopyConstructor;
    pub use copyctor_core::prelude::*;
}
