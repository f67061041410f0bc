//! # Store Errors
//!
//! Errors raised by the store task and its clients. Lookup failures (`NotFound`,
//! `RelationNotFound`) are ordinary outcomes of a request; everything else means the
//! store itself is unusable and is reported as fatal.

use crate::entity::RecordId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },
    #[error("Related {kind} not found: {id}")]
    RelationNotFound { kind: &'static str, id: RecordId },
    #[error("Database error: {0}")]
    Database(String),
    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the error comes from the store machinery rather than from the request.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            StoreError::NotFound { .. } | StoreError::RelationNotFound { .. }
        )
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}
