//! Annotation validation.
//!
//! Every check appends to a shared `Diagnostics` and keeps going, so a single
//! pass reports the full set of problems for a class.

pub mod field;
pub mod target;

pub use field::*;
pub use target::*;

use crate::{
    diagnostic::{Anchor, DiagnosticKind, Diagnostics},
    policy::{AnnotationKind, Depth},
    source::ClassSource,
};

/// Validate the class-level request and every field of the class.
pub fn validate_class<C: ClassSource>(class: &C) -> Diagnostics {
    let mut diags = Diagnostics::new();

    // Phase 1: class-level options.
    if let Some(request) = class.copy_constructor() {
        validate_depth(request.depth, &mut diags);
    }

    // Phase 2: per-field annotations, in declaration order.
    for field in class.fields() {
        validate_field(field, class, &mut diags);
    }

    diags
}

// One is reserved; reject it up front rather than silently dropping fields.
fn validate_depth(depth: Depth, diags: &mut Diagnostics) {
    if depth == Depth::One {
        diags.error(
            DiagnosticKind::Unsupported,
            Anchor::ClassAnnotation,
            format!(
                "{}(depth = One) is reserved and not supported yet; fields without a policy annotation would not be copied",
                AnnotationKind::CopyConstructor
            ),
        );
    }
}

///
/// TESTS
///
