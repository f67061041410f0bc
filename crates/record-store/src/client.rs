//! # Store Clients
//!
//! [`StoreHandle`] is the untyped sending end of a store's channel. Typed
//! [`StoreClient`]s are derived from it, one per record kind; they all feed the same store
//! task. Both are cheap to clone and can be shared across tasks.

use crate::entity::RecordId;
use crate::error::StoreError;
use crate::message::{ResourceRequest, StoreRequest};
use crate::relation::Linked;
use crate::schema::{Member, Schema};
use std::marker::PhantomData;
use tokio::sync::{mpsc, oneshot};

/// Sending end of a [`RecordStore`](crate::RecordStore).
pub struct StoreHandle<S: Schema> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: Schema> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Schema> StoreHandle<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    /// A client for record kind `T`.
    pub fn client<T: Member<S>>(&self) -> StoreClient<S, T> {
        StoreClient {
            sender: self.sender.clone(),
            _kind: PhantomData,
        }
    }
}

/// A type-safe client for one record kind of a store.
///
/// Every method sends one request and waits for its reply. If the store task is gone the
/// call fails with [`StoreError::StoreClosed`] (send failed) or
/// [`StoreError::StoreDropped`] (no reply).
pub struct StoreClient<S: Schema, T: Member<S>> {
    sender: mpsc::Sender<StoreRequest<S>>,
    _kind: PhantomData<fn() -> T>,
}

impl<S: Schema, T: Member<S>> Clone for StoreClient<S, T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            _kind: PhantomData,
        }
    }
}

impl<S: Schema, T: Member<S>> StoreClient<S, T> {
    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::Create { params, respond_to }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::Get { id, respond_to }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::List { respond_to }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn update(&self, id: RecordId, update: T::Update) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::Update {
                id,
                update,
                respond_to,
            }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn delete(&self, id: RecordId) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::Delete { id, respond_to }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn link(&self, id: RecordId, target: RecordId) -> Result<Linked<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::Link {
                id,
                target,
                respond_to,
            }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn clear(&self, id: RecordId) -> Result<Linked<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(T::envelope(ResourceRequest::Clear { id, respond_to }))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
