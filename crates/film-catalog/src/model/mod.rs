//! # Domain Model
//!
//! The two record kinds of the catalog and the [`Catalog`] schema that joins them.
//! An actor's filmography and a movie's cast are the two sides of one association, stored
//! as rows of the `actor_movie` join table.

pub mod actor;
pub mod movie;

pub use actor::{Actor, ActorCreate, ActorUpdate};
pub use movie::{Movie, MovieCreate, MovieUpdate};

use record_store::{Member, ResourceRequest, Schema, StoreRequest};

/// Actors on the left, movies on the right.
#[derive(Debug, Clone, Copy)]
pub struct Catalog;

impl Schema for Catalog {
    type Left = Actor;
    type Right = Movie;

    const LINK_TABLE: &'static str = "actor_movie";

    const MIGRATIONS: &'static [&'static str] = &[
        "CREATE TABLE IF NOT EXISTS actors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            gender TEXT NOT NULL,
            date_of_birth DATE NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            year INTEGER NOT NULL,
            genre TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS actor_movie (
            actor_id INTEGER NOT NULL REFERENCES actors(id),
            movie_id INTEGER NOT NULL REFERENCES movies(id),
            PRIMARY KEY (actor_id, movie_id)
        )",
        "CREATE INDEX IF NOT EXISTS idx_actor_movie_movie ON actor_movie(movie_id)",
    ];
}

impl Member<Catalog> for Actor {
    fn envelope(request: ResourceRequest<Actor>) -> StoreRequest<Catalog> {
        StoreRequest::Left(request)
    }

    fn open(
        request: StoreRequest<Catalog>,
    ) -> Result<ResourceRequest<Actor>, StoreRequest<Catalog>> {
        match request {
            StoreRequest::Left(request) => Ok(request),
            other => Err(other),
        }
    }
}

impl Member<Catalog> for Movie {
    fn envelope(request: ResourceRequest<Movie>) -> StoreRequest<Catalog> {
        StoreRequest::Right(request)
    }

    fn open(
        request: StoreRequest<Catalog>,
    ) -> Result<ResourceRequest<Movie>, StoreRequest<Catalog>> {
        match request {
            StoreRequest::Right(request) => Ok(request),
            other => Err(other),
        }
    }
}
