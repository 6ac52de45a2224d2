use darling::FromMeta;
use derive_more::{Display, FromStr};
use serde::Serialize;
use std::fmt;

///
/// ClassName
///
/// Identifier of an external class supplying a static `copy` function.
/// Whether that function exists is checked by the host's type checker.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

///
/// CopyPolicy
///
/// How a copy constructor initializes one field from the source instance.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum CopyPolicy {
    /// Not initialized from the source at all.
    Exclude,

    /// Assigned the value read through the source's accessor.
    Reference,

    /// Produced by `using.copy(accessor())`.
    Copy { using: ClassName },

    /// Reserved one-level deep copy. Synthesizes no statement.
    One,
}

impl CopyPolicy {
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Reference | Self::Copy { .. })
    }
}

impl From<Depth> for CopyPolicy {
    fn from(depth: Depth) -> Self {
        match depth {
            Depth::Reference => Self::Reference,
            Depth::One => Self::One,
        }
    }
}

///
/// Depth
///
/// Class-level default applied to fields with no policy annotation.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, FromStr, PartialEq, Serialize)]
pub enum Depth {
    #[default]
    Reference,
    One,
}

impl FromMeta for Depth {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }
}

///
/// CopyConstructorRequest
///
/// The class-level generation request and its options.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CopyConstructorRequest {
    pub depth: Depth,
}

impl CopyConstructorRequest {
    #[must_use]
    pub const fn with_depth(depth: Depth) -> Self {
        Self { depth }
    }
}

///
/// PolicyAnnotation
///
/// An explicit per-field policy annotation, with its argument.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PolicyAnnotation {
    Exclude,
    Reference,
    Copy { using: ClassName },
}

impl PolicyAnnotation {
    #[must_use]
    pub fn copy(using: impl Into<String>) -> Self {
        Self::Copy {
            using: ClassName::new(using),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AnnotationKind {
        match self {
            Self::Exclude => AnnotationKind::Exclude,
            Self::Reference => AnnotationKind::Reference,
            Self::Copy { .. } => AnnotationKind::Copy,
        }
    }
}

///
/// AnnotationKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum AnnotationKind {
    CopyConstructor,
    Exclude,
    Reference,
    Copy,
}

impl AnnotationKind {
    /// The per-field policy annotations, in validation order.
    pub const FIELD_POLICIES: [Self; 3] = [Self::Exclude, Self::Reference, Self::Copy];

    #[must_use]
    pub const fn is_field_level(self) -> bool {
        !matches!(self, Self::CopyConstructor)
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CopyConstructor => "@CopyConstructor",
            Self::Exclude => "@CopyConstructor.Exclude",
            Self::Reference => "@CopyConstructor.Reference",
            Self::Copy => "@CopyConstructor.Copy",
        };

        f.write_str(name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_defaults_to_reference() {
        assert_eq!(Depth::default(), Depth::Reference);
        assert_eq!(CopyConstructorRequest::default().depth, Depth::Reference);
    }

    #[test]
    fn depth_parses_from_meta_string() {
        assert_eq!(Depth::from_string("One").unwrap(), Depth::One);
        assert_eq!(Depth::from_string("Reference").unwrap(), Depth::Reference);
        assert!(Depth::from_string("Exclude").is_err());
    }

    #[test]
    fn depth_converts_to_policy() {
        assert_eq!(CopyPolicy::from(Depth::Reference), CopyPolicy::Reference);
        assert_eq!(CopyPolicy::from(Depth::One), CopyPolicy::One);
    }

    #[test]
    fn only_reference_and_copy_generate_statements() {
        assert!(CopyPolicy::Reference.is_generated());
        assert!(
            CopyPolicy::Copy {
                using: "Cloner".into()
            }
            .is_generated()
        );
        assert!(!CopyPolicy::Exclude.is_generated());
        assert!(!CopyPolicy::One.is_generated());
    }

    #[test]
    fn annotation_kinds_render_host_names() {
        assert_eq!(AnnotationKind::CopyConstructor.to_string(), "@CopyConstructor");
        assert_eq!(AnnotationKind::Exclude.to_string(), "@CopyConstructor.Exclude");
        assert_eq!(PolicyAnnotation::copy("Cloner").kind(), AnnotationKind::Copy);
    }
}
