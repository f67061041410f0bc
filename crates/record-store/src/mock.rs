//! # Mock Store & Testing Guide
//!
//! Code built on top of a [`StoreClient`](crate::StoreClient) (validation, error mapping,
//! presentation) can be tested without a running [`RecordStore`](crate::RecordStore).
//! [`create_mock_store`] returns a [`StoreHandle`] whose channel ends in a receiver owned by
//! the test. The test then plays the store: it takes each request off the receiver, checks
//! it and answers through the request's `respond_to` sender.
//!
//! | | Mock store | Real store |
//! |---|---|---|
//! | **State** | None, the test answers | Real tables |
//! | **Error injection** | Answer with any [`StoreError`] | Hard |
//! | **Use case** | Logic *around* the client | The store or the full system |
//!
//! ```rust,ignore
//! let (handle, mut requests) = create_mock_store::<Catalog>(8);
//! let client = ActorClient::new(handle.client());
//!
//! let call = tokio::spawn(async move { client.get_by_id(&fields).await });
//! match expect_request::<Catalog, Actor>(&mut requests).await {
//!     Some(ResourceRequest::Get { respond_to, .. }) => {
//!         let _ = respond_to.send(Err(StoreError::StoreDropped));
//!     }
//!     other => panic!("unexpected request: {other:?}"),
//! }
//! ```
//!
//! To assert that a code path never reaches the store at all, drive it to completion and
//! call [`assert_idle`].

use crate::client::StoreHandle;
use crate::entity::RecordId;
use crate::error::StoreError;
use crate::message::{ResourceRequest, StoreRequest};
use crate::schema::{Member, Schema};
use tokio::sync::{mpsc, oneshot};

/// Creates a store handle and the receiver its requests arrive on.
pub fn create_mock_store<S: Schema>(
    buffer_size: usize,
) -> (StoreHandle<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreHandle::new(sender), receiver)
}

/// Waits for the next request and returns it if it targets record kind `T`.
///
/// Returns `None` when the channel is closed or the request is for the other kind.
pub async fn expect_request<S: Schema, T: Member<S>>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<ResourceRequest<T>> {
    T::open(receiver.recv().await?).ok()
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<S: Schema, T: Member<S>>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, StoreError>>)> {
    match expect_request::<S, T>(receiver).await? {
        ResourceRequest::Create { params, respond_to } => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<S: Schema, T: Member<S>>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(RecordId, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match expect_request::<S, T>(receiver).await? {
        ResourceRequest::Get { id, respond_to } => Some((id, respond_to)),
        _ => None,
    }
}

/// Panics if a request is waiting on the receiver.
pub fn assert_idle<S: Schema>(receiver: &mut mpsc::Receiver<StoreRequest<S>>) {
    if let Ok(request) = receiver.try_recv() {
        panic!("Unexpected {} request reached the store", request.operation());
    }
}
