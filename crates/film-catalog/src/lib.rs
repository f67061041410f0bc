//! # Film Catalog
//!
//! Actors, movies and the many-to-many link between them, kept by a single
//! [`record_store`] task and exposed over HTTP.
//!
//! - **[model]**: [`Actor`](model::Actor) and [`Movie`](model::Movie) records and the [`Catalog`](model::Catalog) schema tying them together.
//! - **[contracts]**: Which fields each operation accepts and how they are coerced.
//! - **[clients]**: [`ActorClient`](clients::ActorClient) and [`MovieClient`](clients::MovieClient), the entity operations.
//! - **[view]**: The JSON shape of records in responses.
//! - **[http]**: Routes, request field collection and error rendering.
//! - **[lifecycle]**: Starting and stopping the store task, and tracing setup.
//!
//! See [`record_store::mock`] for testing clients without a running store.

pub mod clients;
pub mod config;
pub mod contracts;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod view;
