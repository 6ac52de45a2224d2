use crate::{
    diagnostic::{Anchor, DiagnosticKind, Diagnostics},
    policy::{AnnotationKind, PolicyAnnotation},
    source::{ClassSource, FieldSource},
};

/// Number of policy annotations (Exclude, Reference, Copy) attached to a field.
#[must_use]
pub fn count_policy_annotations<F: FieldSource + ?Sized>(field: &F) -> usize {
    AnnotationKind::FIELD_POLICIES
        .iter()
        .filter(|kind| field.has_annotation(**kind))
        .count()
}

/// Validate a field, running exactly one annotation-specific check.
///
/// Exclude takes precedence, then Reference, then Copy, so a field carrying
/// several policy annotations reports a single conflict.
pub fn validate_field<F, C>(field: &F, class: &C, diags: &mut Diagnostics)
where
    F: FieldSource + ?Sized,
    C: ClassSource + ?Sized,
{
    if field.has_annotation(AnnotationKind::Exclude) {
        validate_exclude(field, class, diags);
    } else if field.has_annotation(AnnotationKind::Reference) {
        validate_reference(field, class, diags);
    } else if field.has_annotation(AnnotationKind::Copy) {
        validate_copy(field, class, diags);
    }
}

/// Checks anchored to `@CopyConstructor.Exclude`.
pub fn validate_exclude<F, C>(field: &F, class: &C, diags: &mut Diagnostics)
where
    F: FieldSource + ?Sized,
    C: ClassSource + ?Sized,
{
    let kind = AnnotationKind::Exclude;
    validate_policy_annotation(kind, field, class, diags);

    // a final field excluded from the constructor keeps its initializer
    if class.copy_constructor().is_some() && field.is_final() && field.is_null_initialized() {
        diags.warning(
            DiagnosticKind::Advisory,
            Anchor::field_annotation(field.name(), kind),
            "final field initialized to null and excluded from the copy constructor will remain null forever.",
        );
    }
}

/// Checks anchored to `@CopyConstructor.Reference`.
pub fn validate_reference<F, C>(field: &F, class: &C, diags: &mut Diagnostics)
where
    F: FieldSource + ?Sized,
    C: ClassSource + ?Sized,
{
    validate_policy_annotation(AnnotationKind::Reference, field, class, diags);
}

/// Checks anchored to `@CopyConstructor.Copy`.
pub fn validate_copy<F, C>(field: &F, class: &C, diags: &mut Diagnostics)
where
    F: FieldSource + ?Sized,
    C: ClassSource + ?Sized,
{
    let kind = AnnotationKind::Copy;
    validate_policy_annotation(kind, field, class, diags);

    for annotation in field.annotations() {
        if let PolicyAnnotation::Copy { using } = annotation
            && using.is_blank()
        {
            diags.error(
                DiagnosticKind::Structural,
                Anchor::field_annotation(field.name(), kind),
                format!("{kind} requires usingClass to name a class with a static copy method."),
            );
        }
    }
}

// shared by all three policy annotations
fn validate_policy_annotation<F, C>(
    kind: AnnotationKind,
    field: &F,
    class: &C,
    diags: &mut Diagnostics,
) where
    F: FieldSource + ?Sized,
    C: ClassSource + ?Sized,
{
    let anchor = Anchor::field_annotation(field.name(), kind);

    if count_policy_annotations(field) > 1 {
        diags.error(
            DiagnosticKind::PolicyConflict,
            anchor.clone(),
            format!(
                "{kind} must target a field with no other policy annotations; at most one of Exclude, Reference or Copy is allowed."
            ),
        );
    }

    if field.is_static() {
        diags.error(
            DiagnosticKind::InvalidTarget,
            anchor.clone(),
            "static fields are invalid targets for copying.",
        );
    }

    if class.copy_constructor().is_none() {
        diags.warning(
            DiagnosticKind::Advisory,
            anchor,
            format!(
                "{kind} requires {} on the class for it to mean anything.",
                AnnotationKind::CopyConstructor
            ),
        );
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        diagnostic::Severity,
        model::{ClassTarget, FieldTarget, Initializer, TypeRef},
        policy::Depth,
        source::Modifiers,
    };

    fn annotated() -> ClassTarget {
        ClassTarget::annotated("Note", Depth::Reference)
    }

    fn run(field: &FieldTarget, class: &ClassTarget) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate_field(field, class, &mut diags);
        diags
    }

    #[test]
    fn counts_each_policy_annotation_once() {
        let field = FieldTarget::new("x", TypeRef::new("int"));
        assert_eq!(count_policy_annotations(&field), 0);

        let field = field.exclude().reference().copy_using("Cloner");
        assert_eq!(count_policy_annotations(&field), 3);
    }

    #[test]
    fn unannotated_fields_are_not_checked() {
        let field = FieldTarget::new("x", TypeRef::new("int")).with_modifiers(Modifiers::STATIC);

        assert!(run(&field, &annotated()).is_empty());
    }

    #[test]
    fn single_exclude_is_clean() {
        let field = FieldTarget::new("y", TypeRef::new("int")).exclude();

        assert!(run(&field, &annotated()).is_empty());
    }

    #[test]
    fn reference_and_copy_conflict_once() {
        let field = FieldTarget::new("z", TypeRef::new("List"))
            .reference()
            .copy_using("Cloner");

        let diags = run(&field, &annotated());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::PolicyConflict);
        assert_eq!(
            diags[0].anchor,
            Anchor::field_annotation("z", AnnotationKind::Reference)
        );
    }

    #[test]
    fn conflict_does_not_stop_later_checks() {
        let field = FieldTarget::new("z", TypeRef::new("int"))
            .with_modifiers(Modifiers::STATIC)
            .exclude()
            .reference();

        let diags = run(&field, &ClassTarget::new("Note"));
        let kinds: Vec<_> = diags.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::PolicyConflict,
                DiagnosticKind::InvalidTarget,
                DiagnosticKind::Advisory,
            ]
        );
    }

    #[test]
    fn static_fields_are_invalid_targets() {
        let field = FieldTarget::new("COUNT", TypeRef::new("int"))
            .with_modifiers(Modifiers::STATIC)
            .reference();

        let diags = run(&field, &annotated());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::InvalidTarget);
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn orphan_annotations_warn() {
        let field = FieldTarget::new("y", TypeRef::new("int")).exclude();

        let diags = run(&field, &ClassTarget::new("Note"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("requires @CopyConstructor"));
    }

    #[test]
    fn final_null_excluded_field_warns_once() {
        let field = FieldTarget::new("note", TypeRef::new("String"))
            .with_modifiers(Modifiers::FINAL)
            .initializer(Initializer::NullLiteral)
            .exclude();

        let diags = run(&field, &annotated());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Advisory);
        assert!(!diags.has_errors());
        assert!(diags[0].message.contains("will remain null forever"));
    }

    #[test]
    fn final_null_warning_needs_class_request() {
        let field = FieldTarget::new("note", TypeRef::new("String"))
            .with_modifiers(Modifiers::FINAL)
            .initializer(Initializer::NullLiteral)
            .exclude();

        // the orphan warning replaces the null advisory
        let diags = run(&field, &ClassTarget::new("Note"));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("requires @CopyConstructor"));
    }

    #[test]
    fn non_null_final_field_is_clean() {
        let field = FieldTarget::new("note", TypeRef::new("String"))
            .with_modifiers(Modifiers::FINAL)
            .initializer(Initializer::Other)
            .exclude();

        assert!(run(&field, &annotated()).is_empty());
    }

    #[test]
    fn blank_using_class_is_structural() {
        let field = FieldTarget::new("items", TypeRef::new("List")).copy_using("  ");

        let diags = run(&field, &annotated());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Structural);
    }
}
