use crate::{
    diagnostic::{Anchor, DiagnosticKind, Diagnostics},
    policy::AnnotationKind,
    source::{ClassSource, Modifiers},
};
use tracing::debug;

const NOT_A_CLASS: Modifiers = Modifiers::INTERFACE
    .union(Modifiers::ANNOTATION)
    .union(Modifiers::ENUM);

/// Whether a declaration may receive a synthesized copy constructor.
///
/// Reports exactly one Structural error when it may not. A missing
/// declaration is ineligible.
pub fn is_eligible<C: ClassSource + ?Sized>(class: Option<&C>, diags: &mut Diagnostics) -> bool {
    let eligible = class.is_some_and(|c| !c.modifiers().intersects(NOT_A_CLASS));

    if !eligible {
        debug!(
            class = ?class.map(ClassSource::name),
            "declaration is not eligible for a copy constructor"
        );
        diags.error(
            DiagnosticKind::Structural,
            Anchor::ClassAnnotation,
            format!("{} is only supported on a class.", AnnotationKind::CopyConstructor),
        );
    }

    eligible
}

///
/// TESTS
///
