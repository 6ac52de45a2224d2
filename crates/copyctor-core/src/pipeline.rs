use crate::{
    diagnostic::Diagnostics,
    eligibility::is_eligible,
    error::GenerateError,
    resolve::resolve,
    source::ClassSource,
    synth::{ConstructorPlan, synthesize},
    validate::validate_class,
};
use tracing::debug;

///
/// Generated
///
/// Output of one generation pass over one class.
///

#[derive(Debug, Default)]
pub struct Generated {
    pub diagnostics: Diagnostics,
    pub plan: Option<ConstructorPlan>,
}

impl Generated {
    /// The plan, unless any error diagnostic was reported.
    pub fn into_result(self) -> Result<Option<ConstructorPlan>, GenerateError> {
        match self.diagnostics.result() {
            Ok(_) => Ok(self.plan),
            Err(diags) => Err(GenerateError::Rejected(diags)),
        }
    }
}

/// Run eligibility, validation, resolution, and synthesis for one class.
///
/// Classes without a copy constructor request only have their field
/// annotations validated. An ineligible class stops after its single
/// eligibility error.
pub fn generate<C: ClassSource>(class: Option<&C>) -> Result<Generated, GenerateError> {
    let class = class.ok_or(GenerateError::MissingDeclaration)?;
    let mut out = Generated::default();

    if class.copy_constructor().is_none() {
        debug!(class = class.name(), "no copy constructor requested; validating fields only");
        out.diagnostics = validate_class(class);

        return Ok(out);
    }

    if !is_eligible(Some(class), &mut out.diagnostics) {
        return Ok(out);
    }

    debug!(
        class = class.name(),
        fields = class.fields().len(),
        "generating copy constructor"
    );
    out.diagnostics.extend(validate_class(class));

    let resolved = resolve(class);
    out.plan = Some(synthesize(class, &resolved));

    Ok(out)
}

///
/// TESTS
///
