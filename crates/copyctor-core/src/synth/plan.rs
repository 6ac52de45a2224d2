use crate::{model::TypeRef, policy::ClassName};
use serde::Serialize;

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Visibility {
    #[default]
    Public,
}

///
/// SuperCall
///
/// The explicit constructor call opening the body.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum SuperCall {
    /// Implicit no-arg `super()`.
    #[default]
    Implicit,
}

///
/// Parameter
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    pub is_final: bool,
}

///
/// InitValue
///
/// Right-hand side of a field initialization. Receivers name the
/// constructor parameter.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum InitValue {
    /// `receiver.accessor()`
    Accessor { receiver: String, accessor: String },

    /// `using.copy(receiver.accessor())`
    CopyCall {
        using: ClassName,
        receiver: String,
        accessor: String,
    },
}

///
/// FieldInit
///
/// One `this.field = value` statement.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldInit {
    pub field: String,
    pub value: InitValue,
}

///
/// ConstructorPlan
///
/// Everything the emission host needs to build the constructor.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ConstructorPlan {
    pub class_name: String,
    pub visibility: Visibility,
    pub parameter: Parameter,
    pub super_call: SuperCall,
    pub operations: Vec<FieldInit>,

    /// Marks the constructor as generated code the host must leave alone.
    pub is_synthesized: bool,
}

impl ConstructorPlan {
    // get
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldInit> {
        self.operations.iter().find(|op| op.field == field)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
