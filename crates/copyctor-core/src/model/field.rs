use crate::{
    model::{Initializer, TypeRef},
    policy::PolicyAnnotation,
    source::{FieldSource, Modifiers},
};
use serde::Serialize;

///
/// FieldTarget
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldTarget {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    pub initializer: Initializer,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<PolicyAnnotation>,
}

impl FieldTarget {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::NONE,
            initializer: Initializer::None,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers | modifiers;
        self
    }

    #[must_use]
    pub fn initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = initializer;
        self
    }

    #[must_use]
    pub fn annotate(mut self, annotation: PolicyAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn exclude(self) -> Self {
        self.annotate(PolicyAnnotation::Exclude)
    }

    #[must_use]
    pub fn reference(self) -> Self {
        self.annotate(PolicyAnnotation::Reference)
    }

    #[must_use]
    pub fn copy_using(self, using: impl Into<String>) -> Self {
        self.annotate(PolicyAnnotation::copy(using))
    }
}

impl FieldSource for FieldTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    fn is_final(&self) -> bool {
        self.modifiers.contains(Modifiers::FINAL)
    }

    fn is_null_initialized(&self) -> bool {
        self.initializer == Initializer::NullLiteral
    }

    fn is_boolean(&self) -> bool {
        self.ty.is_boolean()
    }

    fn annotations(&self) -> &[PolicyAnnotation] {
        &self.annotations
    }
}
