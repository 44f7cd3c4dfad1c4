// Conditional request check for mutations.
//
// Purpose
// - Decide whether a client-presented version token authorizes an update or
//   delete of the record it targets.
//
// Responsibilities
// - Exact, value-for-value comparison of the opaque token. No normalization,
//   no partial credit.
// - Update and delete always require a token; a missing one is rejected,
//   never treated as "no precondition".

use thiserror::Error;

use crate::modules::books::core::version::VersionToken;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("a version token is required for this operation")]
    Missing,

    #[error("supplied version {supplied} does not match current version {current}")]
    Mismatch { supplied: String, current: String },
}

pub fn ensure_current(
    supplied: Option<&VersionToken>,
    current: &VersionToken,
) -> Result<(), PreconditionError> {
    match supplied {
        None => Err(PreconditionError::Missing),
        Some(token) if token == current => Ok(()),
        Some(token) => Err(PreconditionError::Mismatch {
            supplied: token.as_str().to_string(),
            current: current.as_str().to_string(),
        }),
    }
}
