use thiserror::Error;

use crate::models::entity::EntityKind;

/// Failure taxonomy of the return-notification operation.
///
/// The first three variants are client-input errors (400); `EntityNotFound`
/// maps to 404; `Store` covers lookup infrastructure failures (500). Dispatch
/// outcomes are never errors — they surface as booleans in the result.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("field `{0}` has an invalid format")]
    InvalidFormat(&'static str),

    #[error("invalid or missing `differences` data")]
    InvalidDifferences,

    #[error("{kind} with id {id} not found")]
    EntityNotFound { kind: EntityKind, id: i64 },

    #[error("entity lookup failed: {0}")]
    Store(anyhow::Error),
}

impl OperationError {
    pub fn status_code(&self) -> u16 {
        match self {
            OperationError::MissingField(_)
            | OperationError::InvalidFormat(_)
            | OperationError::InvalidDifferences => 400,
            OperationError::EntityNotFound { .. } => 404,
            OperationError::Store(_) => 500,
        }
    }
}
