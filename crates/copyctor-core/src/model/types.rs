use serde::Serialize;
use std::fmt;

///
/// TypeRef
///
/// A declared type: a name plus type arguments.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TypeRef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Self>,
}

impl TypeRef {
    pub const BOOLEAN: &'static str = "boolean";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = Self>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    // only the primitive counts; the boxed wrapper uses a get-accessor
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.args.is_empty() && self.name == Self::BOOLEAN
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }

        Ok(())
    }
}

///
/// Initializer
///
/// The shape of a field's declared initializer.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Initializer {
    #[default]
    None,
    NullLiteral,
    Other,
}

///
/// TESTS
///
