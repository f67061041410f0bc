//! # Store Task
//!
//! [`RecordStore`] is the server half of the store. It owns the [`Database`] and the
//! receiving end of the request channel and handles one request at a time, so nothing
//! else ever touches the tables. Clients talk to it through a
//! [`StoreHandle`](crate::StoreHandle).
//!
//! Reads go straight to the database. Every write runs in its own transaction; if anything
//! in it fails the transaction is rolled back and the caller gets the error.

use crate::client::StoreHandle;
use crate::config::{Backend, StoreConfig};
use crate::database::Database;
use crate::entity::Entity;
use crate::error::StoreError;
use crate::message::{ResourceRequest, StoreRequest};
use crate::schema::{Member, Schema};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The store task for schema `S`.
///
/// # Usage Pattern
///
/// 1. **Create**: [`RecordStore::open`] connects to the configured database and returns the
///    store and a [`StoreHandle`].
/// 2. **Run**: spawn [`RecordStore::run`] on the runtime.
/// 3. **Use**: derive typed clients from the handle with [`StoreHandle::client`].
///
/// The task stops once every handle and client has been dropped.
pub struct RecordStore<S: Schema> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    db: Database<S>,
    backend: Backend,
}

impl<S: Schema> RecordStore<S> {
    /// Opens the store described by `config`, creating its tables when missing.
    pub async fn open(config: &StoreConfig) -> Result<(Self, StoreHandle<S>), StoreError> {
        if config.channel_capacity == 0 {
            return Err(StoreError::Config(
                "channel capacity must be positive".to_string(),
            ));
        }
        let backend = Backend::from_url(&config.database_url)?;
        let db = Database::connect(&backend).await?;

        let (sender, receiver) = mpsc::channel(config.channel_capacity);
        let store = Self {
            receiver,
            db,
            backend,
        };
        Ok((store, StoreHandle::new(sender)))
    }

    /// Processes requests until the channel closes.
    pub async fn run(mut self) {
        match self.db.sizes().await {
            Ok((left, right)) => info!(
                left_kind = <S::Left as Entity>::KIND,
                right_kind = <S::Right as Entity>::KIND,
                left,
                right,
                backend = %self.backend,
                "Store started"
            ),
            Err(e) => error!(
                backend = %self.backend,
                error = %e,
                "Store started, counting rows failed"
            ),
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Left(request) => self.handle::<S::Left>(request).await,
                StoreRequest::Right(request) => self.handle::<S::Right>(request).await,
            }
        }

        if let Ok((left, right)) = self.db.sizes().await {
            info!(left, right, "Shutdown");
        }
        self.db.close().await;
    }

    async fn handle<T: Member<S>>(&self, request: ResourceRequest<T>) {
        let entity_type = T::KIND;

        match request {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let result = self.db.create::<T>(params).await;
                match &result {
                    Ok(record) => info!(entity_type, id = %record.id(), "Created"),
                    Err(e) => warn!(entity_type, error = %e, "Create failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Get { id, respond_to } => {
                let result = self.db.get::<T>(id).await;
                debug!(entity_type, %id, found = matches!(result, Ok(Some(_))), "Get");
                let _ = respond_to.send(result);
            }
            ResourceRequest::List { respond_to } => {
                let result = self.db.list::<T>().await;
                match &result {
                    Ok(records) => debug!(entity_type, size = records.len(), "List"),
                    Err(e) => warn!(entity_type, error = %e, "List failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let result = self.db.update::<T>(id, update).await;
                match &result {
                    Ok(Some(_)) => info!(entity_type, %id, "Updated"),
                    Ok(None) => warn!(entity_type, %id, "Not found"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = self.db.delete::<T>(id).await;
                match &result {
                    Ok(true) => info!(entity_type, %id, "Deleted"),
                    Ok(false) => warn!(entity_type, %id, "Not found"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Link {
                id,
                target,
                respond_to,
            } => {
                debug!(entity_type, %id, %target, "Link");
                let result = self.db.link::<T>(id, target).await;
                match &result {
                    Ok(linked) => info!(
                        entity_type,
                        %id,
                        %target,
                        links = linked.counterparts.len(),
                        "Linked"
                    ),
                    Err(e) => warn!(entity_type, %id, %target, error = %e, "Link failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Clear { id, respond_to } => {
                debug!(entity_type, %id, "Clear");
                let result = self.db.clear::<T>(id).await;
                match &result {
                    Ok(_) => info!(entity_type, %id, "Links cleared"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Clear failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
