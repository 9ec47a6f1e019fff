use crate::path::PathError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Failures surfaced by metadata resolution.
///
/// Validation outcomes are never reported here; they are data held in the
/// model's [`ErrorStore`](crate::error_store::ErrorStore). The only failure
/// intrinsic to the core is a malformed field path, which is a programming
/// error in how the caller built the path.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    PathError(#[from] PathError),
}

impl Error {
    /// The offending path, when the error came from path validation.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::PathError(err) => err.path(),
        }
    }
}
