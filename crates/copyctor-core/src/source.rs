//! Read-only host interface over class and field declarations.
//!
//! The engine never sees a host compiler's AST. Hosts implement these traits
//! over whatever representation they own; `model` provides an owned one.

use crate::policy::{AnnotationKind, CopyConstructorRequest, PolicyAnnotation};
use serde::Serialize;
use std::ops::BitOr;

///
/// Modifiers
///
/// Declaration modifier bits as reported by the host.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Modifiers(u16);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const PUBLIC: Self = Self(1 << 0);
    pub const STATIC: Self = Self(1 << 1);
    pub const FINAL: Self = Self(1 << 2);
    pub const INTERFACE: Self = Self(1 << 3);
    pub const ANNOTATION: Self = Self(1 << 4);
    pub const ENUM: Self = Self(1 << 5);

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

///
/// FieldSource
///

pub trait FieldSource {
    fn name(&self) -> &str;

    fn is_static(&self) -> bool;

    fn is_final(&self) -> bool;

    /// True when the declared initializer is exactly a null literal.
    fn is_null_initialized(&self) -> bool;

    /// Host classification of the declared type; selects the accessor prefix.
    fn is_boolean(&self) -> bool;

    fn annotations(&self) -> &[PolicyAnnotation];

    fn has_annotation(&self, kind: AnnotationKind) -> bool {
        self.annotations().iter().any(|a| a.kind() == kind)
    }
}

///
/// ClassSource
///

pub trait ClassSource {
    type Field: FieldSource;

    fn name(&self) -> &str;

    /// Type parameter names, carried unchanged into the constructor parameter type.
    fn type_params(&self) -> Vec<String>;

    fn modifiers(&self) -> Modifiers;

    /// Directly declared fields, in declaration order.
    fn fields(&self) -> &[Self::Field];

    /// The class-level generation request, if the class carries one.
    fn copy_constructor(&self) -> Option<&CopyConstructorRequest>;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_combine_and_test_bits() {
        let m = Modifiers::PUBLIC | Modifiers::FINAL;

        assert!(m.contains(Modifiers::FINAL));
        assert!(!m.contains(Modifiers::STATIC));
        assert!(m.intersects(Modifiers::STATIC | Modifiers::PUBLIC));
        assert!(!Modifiers::NONE.intersects(Modifiers::ENUM));
        assert_eq!(m.bits(), 0b101);
    }
}
