//! # Schemas
//!
//! A [`Schema`] names the two record kinds joined by an association and served by one
//! store task, the join table holding their links, and the statements that create all
//! three tables. Each record kind implements [`Member`], which tells the store task how its
//! requests travel through the shared channel.
//!
//! The store never needs to know which concrete kinds it holds: requests for the left
//! kind and the right kind are dispatched to the same generic handler.

use crate::entity::Associated;
use crate::message::{ResourceRequest, StoreRequest};

/// The pair of record kinds held by one [`Database`](crate::Database).
pub trait Schema: Sized + Send + 'static {
    type Left: Member<Self>;
    type Right: Member<Self>;

    /// Join table with one row per linked pair, keyed by both link columns.
    const LINK_TABLE: &'static str;

    /// `CREATE TABLE IF NOT EXISTS` statements, run in order whenever the store opens.
    const MIGRATIONS: &'static [&'static str];
}

/// A record kind that belongs to schema `S`.
pub trait Member<S: Schema>: Associated {
    /// Wraps a typed request into the schema-wide message.
    fn envelope(request: ResourceRequest<Self>) -> StoreRequest<S>;

    /// Unwraps a schema-wide message addressed to this kind. Gives the message back otherwise.
    fn open(request: StoreRequest<S>) -> Result<ResourceRequest<Self>, StoreRequest<S>>;
}
