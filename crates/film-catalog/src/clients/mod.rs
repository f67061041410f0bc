//! # Entity Operations
//!
//! The public face of the catalog. [`RecordClient`] implements every operation once, on
//! top of a typed [`StoreClient`]; [`ActorClient`] and [`MovieClient`] only say which
//! record kind they serve.
//!
//! All operations take the raw request fields. Ids are read first, then the field contract
//! runs, and only input that passed both is sent to the store. A rejected request never
//! reaches the store.

pub mod actor_client;
pub mod movie_client;

pub use actor_client::ActorClient;
pub use movie_client::MovieClient;

use crate::contracts::{Contract, ID_FIELD, RELATION_ID_FIELD};
use crate::error::CatalogError;
use crate::model::Catalog;
use crate::view::Present;
use async_trait::async_trait;
use record_store::{
    parse_id, Entity, Member, RawFields, RecordId, StoreClient, ValidationError,
};
use tracing::{debug, instrument};

/// Operations shared by the actor and movie clients.
#[async_trait]
pub trait RecordClient: Send + Sync {
    type Record: Member<Catalog> + Contract + Present;

    /// Access the inner typed store client.
    fn store(&self) -> &StoreClient<Catalog, Self::Record>;

    /// Every record, ascending by id.
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<<Self::Record as Present>::View>, CatalogError> {
        debug!("Sending request");
        let records = self.store().list().await?;
        Ok(records.iter().map(Present::view).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(
        &self,
        raw: &RawFields,
    ) -> Result<<Self::Record as Present>::View, CatalogError> {
        let id = parse_id(raw, ID_FIELD)?;
        debug!(%id, "Sending request");
        match self.store().get(id).await? {
            Some(record) => Ok(record.view()),
            None => Err(not_found::<Self::Record>(id)),
        }
    }

    /// Creates a record from exactly the mandatory fields.
    #[instrument(skip(self))]
    async fn add(
        &self,
        raw: &RawFields,
    ) -> Result<<Self::Record as Present>::View, CatalogError> {
        let fields = <Self::Record as Contract>::create_contract().validate(raw)?;
        let params = <Self::Record as Contract>::create_params(&fields)?;
        debug!(?params, "Sending request");
        let record = self.store().create(params).await?;
        Ok(record.view())
    }

    /// Replaces the fields present in `raw` on the record named by its `id`.
    #[instrument(skip(self))]
    async fn update(
        &self,
        raw: &RawFields,
    ) -> Result<<Self::Record as Present>::View, CatalogError> {
        let id = parse_id(raw, ID_FIELD)?;
        let fields = <Self::Record as Contract>::update_contract().validate(raw)?;
        let update = <Self::Record as Contract>::update_params(&fields);
        debug!(%id, ?update, "Sending request");
        match self.store().update(id, update).await? {
            Some(record) => Ok(record.view()),
            None => Err(not_found::<Self::Record>(id)),
        }
    }

    /// Deletes the record and drops it from every counterpart. Returns the deleted id.
    #[instrument(skip(self))]
    async fn delete(&self, raw: &RawFields) -> Result<RecordId, CatalogError> {
        let id = parse_id(raw, ID_FIELD)?;
        debug!(%id, "Sending request");
        if self.store().delete(id).await? {
            Ok(id)
        } else {
            Err(not_found::<Self::Record>(id))
        }
    }

    /// Links the record `id` with the counterpart `relation_id`.
    #[instrument(skip(self))]
    async fn add_relation(
        &self,
        raw: &RawFields,
    ) -> Result<<Self::Record as Present>::View, CatalogError> {
        let missing: Vec<String> = [ID_FIELD, RELATION_ID_FIELD]
            .into_iter()
            .filter(|field| !raw.contains_key(*field))
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing).into());
        }
        let id = parse_id(raw, ID_FIELD)?;
        let target = parse_id(raw, RELATION_ID_FIELD)?;
        debug!(%id, %target, "Sending request");
        let linked = self.store().link(id, target).await?;
        Ok(<Self::Record as Present>::view_linked(&linked))
    }

    /// Removes every link of the record `id`.
    #[instrument(skip(self))]
    async fn clear_relations(
        &self,
        raw: &RawFields,
    ) -> Result<<Self::Record as Present>::View, CatalogError> {
        let id = parse_id(raw, ID_FIELD)?;
        debug!(%id, "Sending request");
        let cleared = self.store().clear(id).await?;
        Ok(<Self::Record as Present>::view_linked(&cleared))
    }
}

fn not_found<T: Entity>(id: RecordId) -> CatalogError {
    CatalogError::NotFound { kind: T::KIND, id }
}
