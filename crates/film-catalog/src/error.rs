//! Error types for catalog operations.

use record_store::{RecordId, StoreError, ValidationError};
use thiserror::Error;

/// Errors returned by [`RecordClient`](crate::clients::RecordClient) operations.
///
/// Everything except [`CatalogError::Store`] is the caller's fault and is answered with a
/// client error. `Store` means the store itself failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The request fields were rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error("Record with such id does not exist")]
    NotFound { kind: &'static str, id: RecordId },

    /// The record to link with does not exist.
    #[error("Related record with such id does not exist")]
    RelationNotFound { kind: &'static str, id: RecordId },

    #[error("Store failure: {0}")]
    Store(StoreError),
}

impl CatalogError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CatalogError::Store(_))
    }
}

impl From<StoreError> for CatalogError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { kind, id } => CatalogError::NotFound { kind, id },
            StoreError::RelationNotFound { kind, id } => {
                CatalogError::RelationNotFound { kind, id }
            }
            fatal => CatalogError::Store(fatal),
        }
    }
}
