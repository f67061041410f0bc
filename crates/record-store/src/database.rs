//! # Database
//!
//! The [`Database`] owns the SQLite pool of a schema and exposes the generic record
//! operations. The store task is its only user, which is what makes the single-writer rule
//! hold: the pool holds a single connection and requests are served one after another.
//!
//! Every mutation runs in its own transaction. It is committed when the operation succeeds;
//! on any error the transaction is dropped, which rolls back everything it touched in both
//! record tables and the join table.

use crate::config::Backend;
use crate::entity::RecordId;
use crate::error::StoreError;
use crate::records;
use crate::relation::{self, Linked};
use crate::schema::{Member, Schema};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

pub struct Database<S: Schema> {
    pool: SqlitePool,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> Database<S> {
    /// Connects to `backend` and creates any missing tables.
    pub async fn connect(backend: &Backend) -> Result<Self, StoreError> {
        // An in-memory database lives exactly as long as its connection, so the one
        // connection is never retired.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(backend.connect_options()?)
            .await?;

        let db = Self {
            pool,
            _schema: PhantomData,
        };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        for statement in S::MIGRATIONS {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!(statements = S::MIGRATIONS.len(), "Schema ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Opens a transaction. Dropping it without `commit` rolls it back.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, StoreError> {
        Ok(self.pool.begin().await?)
    }

    /// Row counts of the left and right tables.
    pub async fn sizes(&self) -> Result<(i64, i64), StoreError> {
        let mut conn = self.pool.acquire().await?;
        let left = records::count::<S::Left>(&mut conn).await?;
        let right = records::count::<S::Right>(&mut conn).await?;
        Ok((left, right))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn create<T: Member<S>>(&self, params: T::Create) -> Result<T, StoreError> {
        let mut tx = self.begin().await?;
        let record = records::insert::<T>(&mut tx, params).await?;
        tx.commit().await?;
        Ok(record)
    }

    pub async fn get<T: Member<S>>(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        records::fetch::<T>(&mut conn, id).await
    }

    pub async fn list<T: Member<S>>(&self) -> Result<Vec<T>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        records::fetch_all::<T>(&mut conn).await
    }

    /// Applies `update` to an existing record. `None` when the id is unknown.
    pub async fn update<T: Member<S>>(
        &self,
        id: RecordId,
        update: T::Update,
    ) -> Result<Option<T>, StoreError> {
        let mut tx = self.begin().await?;
        let record = records::update::<T>(&mut tx, id, update).await?;
        tx.commit().await?;
        Ok(record)
    }

    /// Removes a record and its links. Returns whether a record was removed.
    pub async fn delete<T: Member<S>>(&self, id: RecordId) -> Result<bool, StoreError> {
        let mut tx = self.begin().await?;
        relation::detach::<S, T>(&mut tx, id).await?;
        let removed = records::delete::<T>(&mut tx, id).await?;
        tx.commit().await?;
        Ok(removed)
    }

    pub async fn link<T: Member<S>>(
        &self,
        id: RecordId,
        target: RecordId,
    ) -> Result<Linked<T>, StoreError> {
        let mut tx = self.begin().await?;
        let linked = relation::link::<S, T>(&mut tx, id, target).await?;
        tx.commit().await?;
        Ok(linked)
    }

    pub async fn clear<T: Member<S>>(&self, id: RecordId) -> Result<Linked<T>, StoreError> {
        let mut tx = self.begin().await?;
        let cleared = relation::clear::<S, T>(&mut tx, id).await?;
        tx.commit().await?;
        Ok(cleared)
    }
}
