use crate::{
    model::FieldTarget,
    policy::{CopyConstructorRequest, Depth},
    source::{ClassSource, Modifiers},
};
use serde::Serialize;

///
/// ClassTarget
///
/// An owned class declaration. Fields keep their declaration order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ClassTarget {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,

    pub modifiers: Modifiers,
    pub fields: Vec<FieldTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<CopyConstructorRequest>,
}

impl ClassTarget {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            modifiers: Modifiers::PUBLIC,
            fields: Vec::new(),
            request: None,
        }
    }

    /// A class carrying `@CopyConstructor` with the given default depth.
    #[must_use]
    pub fn annotated(name: impl Into<String>, depth: Depth) -> Self {
        Self::new(name).request(CopyConstructorRequest::with_depth(depth))
    }

    #[must_use]
    pub fn request(mut self, request: CopyConstructorRequest) -> Self {
        self.request = Some(request);
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers | modifiers;
        self
    }

    #[must_use]
    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldTarget) -> Self {
        self.fields.push(field);
        self
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldTarget> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl ClassSource for ClassTarget {
    type Field = FieldTarget;

    fn name(&self) -> &str {
        &self.name
    }

    fn type_params(&self) -> Vec<String> {
        self.type_params.clone()
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn fields(&self) -> &[FieldTarget] {
        &self.fields
    }

    fn copy_constructor(&self) -> Option<&CopyConstructorRequest> {
        self.request.as_ref()
    }
}
