//! Movie client.

use super::RecordClient;
use crate::model::{Catalog, Movie};
use async_trait::async_trait;
use record_store::StoreClient;

#[derive(Clone)]
pub struct MovieClient {
    inner: StoreClient<Catalog, Movie>,
}

impl MovieClient {
    pub fn new(inner: StoreClient<Catalog, Movie>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient for MovieClient {
    type Record = Movie;

    fn store(&self) -> &StoreClient<Catalog, Movie> {
        &self.inner
    }
}
