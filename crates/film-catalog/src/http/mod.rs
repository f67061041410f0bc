//! # HTTP Boundary
//!
//! Maps the catalog operations onto routes and renders their outcomes as JSON.
//!
//! | Path | Method | Operation |
//! |---|---|---|
//! | `/api/actors`, `/api/movies` | GET | list all |
//! | `/api/actor`, `/api/movie` | GET | get by id |
//! | | POST | add |
//! | | PUT | update |
//! | | DELETE | delete |
//! | `/api/actor-relations`, `/api/movie-relations` | PUT | add relation |
//! | | DELETE | clear relations |
//!
//! Fields are taken from the query string and from a JSON object body. Successful calls
//! answer 200 with the record (or a message for deletes). Rejected requests answer 400 with
//! `{"error": message}`; a failing store answers 500 with the same shape.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::{ActorClient, MovieClient};
use crate::lifecycle::CatalogSystem;
use axum::extract::FromRef;
use axum::routing::{get, put};
use axum::Router;
use handlers::{add, add_relation, clear_relations, delete, get_by_id, list_all, update};
use tower_http::trace::TraceLayer;

/// Shared state of the router: one client per record kind.
#[derive(Clone)]
pub struct AppState {
    pub actors: ActorClient,
    pub movies: MovieClient,
}

impl AppState {
    pub fn new(system: &CatalogSystem) -> Self {
        Self {
            actors: system.actors.clone(),
            movies: system.movies.clone(),
        }
    }
}

impl FromRef<AppState> for ActorClient {
    fn from_ref(state: &AppState) -> Self {
        state.actors.clone()
    }
}

impl FromRef<AppState> for MovieClient {
    fn from_ref(state: &AppState) -> Self {
        state.movies.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/actors", get(list_all::<ActorClient>))
        .route("/api/movies", get(list_all::<MovieClient>))
        .route(
            "/api/actor",
            get(get_by_id::<ActorClient>)
                .post(add::<ActorClient>)
                .put(update::<ActorClient>)
                .delete(delete::<ActorClient>),
        )
        .route(
            "/api/movie",
            get(get_by_id::<MovieClient>)
                .post(add::<MovieClient>)
                .put(update::<MovieClient>)
                .delete(delete::<MovieClient>),
        )
        .route(
            "/api/actor-relations",
            put(add_relation::<ActorClient>).delete(clear_relations::<ActorClient>),
        )
        .route(
            "/api/movie-relations",
            put(add_relation::<MovieClient>).delete(clear_relations::<MovieClient>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
