//! Java-shaped source rendering of a constructor plan.

use crate::synth::{ConstructorPlan, FieldInit, InitValue, Visibility};
use std::fmt;

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
        }
    }
}

impl fmt::Display for InitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accessor { receiver, accessor } => write!(f, "{receiver}.{accessor}()"),
            Self::CopyCall {
                using,
                receiver,
                accessor,
            } => write!(f, "{using}.copy({receiver}.{accessor}())"),
        }
    }
}

impl fmt::Display for FieldInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "this.{} = {}", self.field, self.value)
    }
}

impl fmt::Display for ConstructorPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let param = &self.parameter;
        let modifier = if param.is_final { "final " } else { "" };

        write!(
            f,
            "{} {}({modifier}{} {}) {{",
            self.visibility, self.class_name, param.ty, param.name
        )?;

        if self.operations.is_empty() {
            return f.write_str("}");
        }

        for op in &self.operations {
            write!(f, "\n    {op};")?;
        }

        f.write_str("\n}")
    }
}
