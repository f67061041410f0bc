//! # Actor Client
//!
//! Provides the catalog operations for actors. Every operation comes from
//! [`RecordClient`]; this wrapper only pins the record kind.

use super::RecordClient;
use crate::model::{Actor, Catalog};
use async_trait::async_trait;
use record_store::StoreClient;

/// Client for actor records.
#[derive(Clone)]
pub struct ActorClient {
    inner: StoreClient<Catalog, Actor>,
}

impl ActorClient {
    pub fn new(inner: StoreClient<Catalog, Actor>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient for ActorClient {
    type Record = Actor;

    fn store(&self) -> &StoreClient<Catalog, Actor> {
        &self.inner
    }
}
