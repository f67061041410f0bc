//! # Record Store
//!
//! Building blocks for a small, type-safe record service: a generic CRUD store for two
//! record kinds joined by a symmetric many-to-many association, and the validation pipeline
//! that turns loose client input into typed fields before it reaches the store.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`Entity`], [`Associated`], [`Schema`]) - what a record is, how it is
//!    created and updated, and which records it can be linked to.
//! 2. **Storage Layer** ([`Database`], [`records`], [`relation`]) - SQLite tables with
//!    autoincrement ids, one transaction per write, and the relationship manager that keeps
//!    the join table in sync with both record tables.
//! 3. **Runtime Layer** ([`RecordStore`]) - a single Tokio task that owns the database and
//!    serves requests one by one. This is the only writer, so no locks are needed.
//! 4. **Interface Layer** ([`StoreHandle`], [`StoreClient`]) - cloneable, typed async
//!    clients that talk to the task over a channel.
//!
//! [`validation`] sits beside these layers: callers validate first and only then talk to
//! the store, so malformed input never costs a round trip.
//!
//! ## Defining a Schema
//!
//! ```rust,ignore
//! struct Library;
//!
//! impl Schema for Library {
//!     type Left = Author;
//!     type Right = Book;
//!     const LINK_TABLE: &'static str = "author_book";
//!     const MIGRATIONS: &'static [&'static str] = &[
//!         "CREATE TABLE IF NOT EXISTS authors (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
//!         "CREATE TABLE IF NOT EXISTS books (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL)",
//!         "CREATE TABLE IF NOT EXISTS author_book (author_id INTEGER NOT NULL, book_id INTEGER NOT NULL, \
//!          PRIMARY KEY (author_id, book_id))",
//!     ];
//! }
//!
//! impl Member<Library> for Author {
//!     fn envelope(request: ResourceRequest<Author>) -> StoreRequest<Library> {
//!         StoreRequest::Left(request)
//!     }
//!     fn open(request: StoreRequest<Library>) -> Result<ResourceRequest<Author>, StoreRequest<Library>> {
//!         match request {
//!             StoreRequest::Left(request) => Ok(request),
//!             other => Err(other),
//!         }
//!     }
//! }
//! // ... and the mirror image for Book on the right side.
//!
//! let (store, handle) = RecordStore::<Library>::open(&StoreConfig::default()).await?;
//! tokio::spawn(store.run());
//!
//! let authors = handle.client::<Author>();
//! let books = handle.client::<Book>();
//! let author = authors.create(AuthorCreate { name: "Le Guin".into() }).await?;
//! let book = books.create(BookCreate { title: "Earthsea".into() }).await?;
//! let linked = authors.link(author.id, book.id).await?;
//! ```
//!
//! ## Persistence
//!
//! [`StoreConfig::database_url`] selects the SQLite database: `memory://` (or
//! `sqlite::memory:`) lives as long as the store, `sqlite://<path>` is a file that is
//! created on first open. Missing tables are created on every open. See [`Backend`].
//!
//! ## Testing
//!
//! The [`mock`] module hands out clients wired to a channel the test controls, for testing
//! code built on [`StoreClient`] without spawning a store.

pub mod client;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod records;
pub mod relation;
pub mod schema;
pub mod store;
pub mod validation;

pub use client::{StoreClient, StoreHandle};
pub use config::{Backend, StoreConfig};
pub use database::Database;
pub use entity::{Assignments, Associated, Entity, RecordId};
pub use error::StoreError;
pub use message::{ResourceRequest, Response, StoreRequest};
pub use relation::Linked;
pub use schema::{Member, Schema};
pub use store::RecordStore;
pub use validation::{
    parse_id, Coercion, FieldContract, FieldValue, Fields, RawFields, ValidationError,
};
