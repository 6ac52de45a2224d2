use crate::{
    diagnostic::{Anchor, Diagnostic, DiagnosticKind},
    policy::AnnotationKind,
};

///
/// TargetKind
///
/// The kind of declaration an annotation was placed on.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetKind {
    Type,
    Field,
    Method,
    Other,
}

/// Check that an annotation sits on a declaration it supports.
///
/// `field` names the annotated field when the target is one, so the
/// diagnostic can be anchored to it. Otherwise it is anchored to the
/// misplaced annotation itself.
#[must_use]
pub fn check_annotation_target(
    kind: AnnotationKind,
    target: TargetKind,
    field: Option<&str>,
) -> Option<Diagnostic> {
    if kind.is_field_level() {
        (target != TargetKind::Field).then(|| {
            Diagnostic::error(
                DiagnosticKind::Structural,
                Anchor::Annotation { annotation: kind },
                format!("{kind} is only supported on a field."),
            )
        })
    } else {
        (target != TargetKind::Type).then(|| {
            let anchor = field.map_or(Anchor::Annotation { annotation: kind }, |field| {
                Anchor::field_annotation(field, kind)
            });

            Diagnostic::error(
                DiagnosticKind::Structural,
                anchor,
                format!("{kind} is only supported on a class."),
            )
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_annotations_belong_on_fields() {
        assert!(
            check_annotation_target(AnnotationKind::Exclude, TargetKind::Field, Some("x"))
                .is_none()
        );

        let diag = check_annotation_target(AnnotationKind::Copy, TargetKind::Type, None).unwrap();
        assert_eq!(diag.kind, DiagnosticKind::Structural);
        assert_eq!(
            diag.anchor,
            Anchor::Annotation {
                annotation: AnnotationKind::Copy
            }
        );
        assert_eq!(diag.message, "@CopyConstructor.Copy is only supported on a field.");
    }

    #[test]
    fn class_annotation_belongs_on_types() {
        assert!(
            check_annotation_target(AnnotationKind::CopyConstructor, TargetKind::Type, None)
                .is_none()
        );

        let diag = check_annotation_target(
            AnnotationKind::CopyConstructor,
            TargetKind::Field,
            Some("x"),
        )
        .unwrap();
        assert_eq!(
            diag.anchor,
            Anchor::field_annotation("x", AnnotationKind::CopyConstructor)
        );
        assert_eq!(diag.message, "@CopyConstructor is only supported on a class.");
    }

    #[test]
    fn misplaced_class_annotation_without_field_names_the_annotation() {
        let diag =
            check_annotation_target(AnnotationKind::CopyConstructor, TargetKind::Method, None)
                .unwrap();

        assert_eq!(
            diag.anchor,
            Anchor::Annotation {
                annotation: AnnotationKind::CopyConstructor
            }
        );
    }
}
