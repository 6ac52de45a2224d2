//! ## Crate layout
//! - `policy`: copy policies, the class-level default depth, and annotation kinds.
//! - `source`: the narrow host interface the engine reads declarations through.
//! - `model`: an owned declaration model implementing the host interface.
//! - `diagnostic`: aggregated error and warning reporting.
//! - `validate`: annotation target, field, and class validation.
//! - `eligibility`: the concrete-class gate in front of generation.
//! - `resolve`: per-field policy resolution.
//! - `synth`: constructor plan synthesis and rendering.
//! - `pipeline`: the single-pass driver tying the stages together.

pub mod diagnostic;
pub mod eligibility;
pub mod error;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod policy;
pub mod resolve;
pub mod source;
pub mod synth;
pub mod validate;

pub use error::{Error, GenerateError};
pub use pipeline::{Generated, generate};

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        diagnostic::{Anchor, Diagnostic, DiagnosticKind, Diagnostics, Severity},
        model::{ClassTarget, FieldTarget, Initializer, TypeRef},
        policy::{
            AnnotationKind, ClassName, CopyConstructorRequest, CopyPolicy, Depth, PolicyAnnotation,
        },
        resolve::ResolvedFieldPlan,
        source::{ClassSource, FieldSource, Modifiers},
        synth::{ConstructorPlan, FieldInit, InitValue},
    };
}
