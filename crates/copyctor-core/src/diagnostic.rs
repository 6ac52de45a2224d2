use crate::policy::AnnotationKind;
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use std::fmt;

///
/// Severity
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

///
/// DiagnosticKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum DiagnosticKind {
    /// Non-blocking hint: orphan annotation, final field that stays null.
    Advisory,

    /// A policy annotation on a static field.
    InvalidTarget,

    /// More than one explicit policy annotation on a field.
    PolicyConflict,

    /// Misplaced annotation or ineligible declaration.
    Structural,

    /// A requested policy the generator does not implement.
    Unsupported,
}

///
/// Anchor
///
/// The declaration element a diagnostic is reported against.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Anchor {
    /// An annotation placed somewhere other than a field or the class.
    Annotation {
        annotation: AnnotationKind,
    },
    Class,
    ClassAnnotation,
    Field {
        field: String,
    },
    FieldAnnotation {
        field: String,
        annotation: AnnotationKind,
    },
}

impl Anchor {
    #[must_use]
    pub fn field(field: &str) -> Self {
        Self::Field {
            field: field.to_string(),
        }
    }

    #[must_use]
    pub fn field_annotation(field: &str, annotation: AnnotationKind) -> Self {
        Self::FieldAnnotation {
            field: field.to_string(),
            annotation,
        }
    }

    /// The field this anchor points into, if any.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field { field } | Self::FieldAnnotation { field, .. } => Some(field),
            Self::Annotation { .. } | Self::Class | Self::ClassAnnotation => None,
        }
    }

    /// The annotation this anchor points at, if any.
    #[must_use]
    pub const fn annotation(&self) -> Option<AnnotationKind> {
        match self {
            Self::Annotation { annotation } | Self::FieldAnnotation { annotation, .. } => {
                Some(*annotation)
            }
            Self::ClassAnnotation => Some(AnnotationKind::CopyConstructor),
            Self::Class | Self::Field { .. } => None,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Annotation { annotation } => write!(f, "{annotation}"),
            Self::Class => f.write_str("class"),
            Self::ClassAnnotation => write!(f, "{}", AnnotationKind::CopyConstructor),
            Self::Field { field } => write!(f, "field '{field}'"),
            Self::FieldAnnotation { field, annotation } => {
                write!(f, "{annotation} on field '{field}'")
            }
        }
    }
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub anchor: Anchor,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(kind: DiagnosticKind, anchor: Anchor, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            anchor,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(kind: DiagnosticKind, anchor: Anchor, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            anchor,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        write!(f, "{severity} at {}: {}", self.anchor, self.message)
    }
}

///
/// Diagnostics
///
/// Aggregated, ordered diagnostic list. Checks append and keep going; nothing
/// here short-circuits on the first error.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    #[into_iterator(owned, ref)]
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, kind: DiagnosticKind, anchor: Anchor, message: impl Into<String>) {
        self.push(Diagnostic::error(kind, anchor, message));
    }

    pub fn warning(&mut self, kind: DiagnosticKind, anchor: Anchor, message: impl Into<String>) {
        self.push(Diagnostic::warning(kind, anchor, message));
    }

    pub fn extend(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| !d.is_error())
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    /// `Err(self)` when any error was recorded; warnings alone pass.
    pub fn result(self) -> Result<Self, Self> {
        if self.has_errors() { Err(self) } else { Ok(self) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{diagnostic}")?;
        }

        Ok(())
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(items: Vec<Diagnostic>) -> Self {
        Self { items }
    }
}

///
/// TESTS
///
