mod plan;
mod render;

pub use plan::*;

use crate::{
    model::TypeRef,
    naming::{accessor_name, parameter_name},
    policy::CopyPolicy,
    resolve::ResolvedFieldPlan,
    source::{ClassSource, FieldSource},
};
use tracing::debug;

/// Turn a resolved plan into the copy constructor's description.
///
/// One operation per Reference or Copy field, in declaration order. Exclude
/// and the reserved One policy emit nothing.
#[must_use]
pub fn synthesize<C: ClassSource>(
    class: &C,
    plan: &ResolvedFieldPlan<'_, C::Field>,
) -> ConstructorPlan {
    let receiver = parameter_name(class.name());
    let ty = TypeRef::generic(
        class.name(),
        class.type_params().into_iter().map(TypeRef::new),
    );

    let operations: Vec<FieldInit> = plan
        .iter()
        .filter_map(|(field, policy)| field_init(field, policy, &receiver))
        .collect();

    debug!(
        class = class.name(),
        operations = operations.len(),
        skipped = plan.len() - operations.len(),
        "copy constructor synthesized"
    );

    ConstructorPlan {
        class_name: class.name().to_string(),
        visibility: Visibility::Public,
        parameter: Parameter {
            name: receiver,
            ty,
            is_final: true,
        },
        super_call: SuperCall::Implicit,
        operations,
        is_synthesized: true,
    }
}

fn field_init<F: FieldSource>(field: &F, policy: &CopyPolicy, receiver: &str) -> Option<FieldInit> {
    let accessor = accessor_name(field.name(), field.is_boolean());
    let receiver = receiver.to_string();

    let value = match policy {
        CopyPolicy::Reference => InitValue::Accessor { receiver, accessor },
        CopyPolicy::Copy { using } => InitValue::CopyCall {
            using: using.clone(),
            receiver,
            accessor,
        },
        CopyPolicy::Exclude | CopyPolicy::One => return None,
    };

    Some(FieldInit {
        field: field.name().to_string(),
        value,
    })
}

///
/// TESTS
///
