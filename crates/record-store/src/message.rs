//! # Store Messages
//!
//! Messages sent from a [`StoreClient`](crate::StoreClient) to the store task. Every request
//! carries a oneshot sender used to deliver exactly one reply.
//!
//! A request is typed by the record kind it targets ([`ResourceRequest<T>`]). Since both
//! kinds of a schema share one task and one channel, requests travel wrapped in a
//! [`StoreRequest<S>`] that only records which side they belong to.

use crate::entity::{Associated, RecordId};
use crate::error::StoreError;
use crate::relation::Linked;
use crate::schema::Schema;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Operations available on one record kind.
///
/// The first five variants are plain CRUD. `Link` and `Clear` go through the relationship
/// manager and always touch both tables.
#[derive(Debug)]
pub enum ResourceRequest<T: Associated> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: RecordId,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: RecordId,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<bool>,
    },
    Link {
        id: RecordId,
        target: RecordId,
        respond_to: Response<Linked<T>>,
    },
    Clear {
        id: RecordId,
        respond_to: Response<Linked<T>>,
    },
}

impl<T: Associated> ResourceRequest<T> {
    /// Short operation name for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::List { .. } => "List",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::Link { .. } => "Link",
            ResourceRequest::Clear { .. } => "Clear",
        }
    }
}

/// A request addressed to one side of schema `S`.
pub enum StoreRequest<S: Schema> {
    Left(ResourceRequest<S::Left>),
    Right(ResourceRequest<S::Right>),
}

impl<S: Schema> StoreRequest<S> {
    pub fn operation(&self) -> &'static str {
        match self {
            StoreRequest::Left(request) => request.operation(),
            StoreRequest::Right(request) => request.operation(),
        }
    }
}
