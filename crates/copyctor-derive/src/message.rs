use copyctor_core::prelude::*;

/// Rephrase an engine diagnostic in terms of the derive's own attributes.
///
/// Diagnostics the derive cannot produce keep the engine's wording.
pub fn rust_message(diagnostic: &Diagnostic) -> String {
    match (diagnostic.kind, &diagnostic.anchor) {
        (DiagnosticKind::PolicyConflict, Anchor::FieldAnnotation { .. }) => {
            "a field takes at most one copy policy; use only one of \
             `#[copy_constructor(exclude)]`, `#[copy_constructor(reference)]` or \
             `#[copy_constructor(copy(using = ..))]`"
                .to_string()
        }
        (DiagnosticKind::Unsupported, _) => {
            "the `One` copy depth is reserved and not supported yet; \
             omit `depth` to copy fields by reference"
                .to_string()
        }
        (DiagnosticKind::Structural, Anchor::ClassAnnotation) => {
            "CopyConstructor can only be derived for structs".to_string()
        }
        (DiagnosticKind::Structural, Anchor::Annotation { annotation }) => {
            if annotation.is_field_level() {
                format!("`{}` is only supported on a field", attribute(*annotation))
            } else {
                format!("`{}` is only supported on a struct", attribute(*annotation))
            }
        }
        (
            DiagnosticKind::Structural,
            Anchor::FieldAnnotation {
                annotation: AnnotationKind::CopyConstructor,
                ..
            },
        ) => format!(
            "`{}` is only supported on the struct, not on a field",
            attribute(AnnotationKind::CopyConstructor)
        ),
        _ => diagnostic.message.clone(),
    }
}

// attribute
const fn attribute(kind: AnnotationKind) -> &'static str {
    match kind {
        AnnotationKind::CopyConstructor => "#[copy_constructor(depth = ..)]",
        AnnotationKind::Exclude => "#[copy_constructor(exclude)]",
        AnnotationKind::Reference => "#[copy_constructor(reference)]",
        AnnotationKind::Copy => "#[copy_constructor(copy(using = ..))]",
    }
}

///
/// TESTS
///
