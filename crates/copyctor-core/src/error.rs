use crate::{ThisError, diagnostic::Diagnostics};

///
/// GenerateError
///
/// Failures of a single generation pass. Policy and validation problems are
/// reported as diagnostics; they only become an error here when a caller asks
/// for a strict result via `Generated::into_result`.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("no class declaration was supplied to the copy constructor generator")]
    MissingDeclaration,

    #[error("copy constructor generation rejected: {0}")]
    Rejected(Diagnostics),
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    GenerateError(#[from] GenerateError),
}
