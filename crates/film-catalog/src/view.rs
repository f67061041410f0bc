//! # Presentation
//!
//! What callers get back. Plain records expose only their public fields; the association
//! shows up only in replies to relation operations, as the display form of each linked
//! record.

use crate::model::{Actor, Movie};
use chrono::NaiveDate;
use record_store::{Associated, Linked, RecordId};
use serde::Serialize;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub id: RecordId,
    pub name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filmography: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub id: RecordId,
    pub name: String,
    pub year: i64,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
}

/// Converts a record into its outward form.
pub trait Present: Associated {
    type View: Serialize + Debug + Send + 'static;

    fn view(&self) -> Self::View;

    /// The view with the association filled in.
    fn view_linked(linked: &Linked<Self>) -> Self::View;
}

impl Present for Actor {
    type View = ActorView;

    fn view(&self) -> ActorView {
        ActorView {
            id: self.id,
            name: self.name.clone(),
            gender: self.gender.clone(),
            date_of_birth: self.date_of_birth,
            filmography: None,
        }
    }

    fn view_linked(linked: &Linked<Self>) -> ActorView {
        ActorView {
            filmography: Some(linked.counterparts.iter().map(Movie::to_string).collect()),
            ..linked.record.view()
        }
    }
}

impl Present for Movie {
    type View = MovieView;

    fn view(&self) -> MovieView {
        MovieView {
            id: self.id,
            name: self.name.clone(),
            year: self.year,
            genre: self.genre.clone(),
            cast: None,
        }
    }

    fn view_linked(linked: &Linked<Self>) -> MovieView {
        MovieView {
            cast: Some(linked.counterparts.iter().map(Actor::to_string).collect()),
            ..linked.record.view()
        }
    }
}
