use crate::{
    policy::{CopyPolicy, PolicyAnnotation},
    source::{ClassSource, FieldSource},
};
use tracing::trace;

///
/// ResolvedFieldPlan
///
/// Field → policy mapping for one class, in field declaration order.
/// Static and excluded fields have no entry.
///

#[derive(Debug)]
pub struct ResolvedFieldPlan<'a, F> {
    entries: Vec<(&'a F, CopyPolicy)>,
}

impl<'a, F: FieldSource> ResolvedFieldPlan<'a, F> {
    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CopyPolicy> {
        self.entries
            .iter()
            .find(|(field, _)| field.name() == name)
            .map(|(_, policy)| policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a F, &CopyPolicy)> {
        self.entries.iter().map(|(field, policy)| (*field, policy))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(field name, policy)` pairs, in order.
    #[must_use]
    pub fn policies(&self) -> Vec<(&str, &CopyPolicy)> {
        self.entries
            .iter()
            .map(|(field, policy)| (field.name(), policy))
            .collect()
    }
}

/// Resolve the effective copy policy of every directly declared field.
///
/// Annotations win over the class default. When several conflict, Copy is
/// taken over Reference; the conflict itself is the validator's to report.
#[must_use]
pub fn resolve<C: ClassSource>(class: &C) -> ResolvedFieldPlan<'_, C::Field> {
    let default = CopyPolicy::from(class.copy_constructor().map(|r| r.depth).unwrap_or_default());
    let mut entries = Vec::with_capacity(class.fields().len());

    for field in class.fields() {
        let Some(policy) = resolve_field(field, &default) else {
            continue;
        };

        trace!(class = class.name(), field = field.name(), ?policy, "copy policy resolved");
        entries.push((field, policy));
    }

    ResolvedFieldPlan { entries }
}

// None means the field takes no part in the copy constructor
fn resolve_field<F: FieldSource>(field: &F, default: &CopyPolicy) -> Option<CopyPolicy> {
    if field.is_static() {
        return None;
    }

    let annotations = field.annotations();
    if annotations.contains(&PolicyAnnotation::Exclude) {
        return None;
    }

    let copy = annotations.iter().find_map(|a| match a {
        PolicyAnnotation::Copy { using } => Some(CopyPolicy::Copy {
            using: using.clone(),
        }),
        _ => None,
    });
    if copy.is_some() {
        return copy;
    }

    if annotations.contains(&PolicyAnnotation::Reference) {
        return Some(CopyPolicy::Reference);
    }

    Some(default.clone())
}

///
/// TESTS
///
