use record_store::{Assignments, Associated, Entity, FieldValue, RecordId};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::fmt;

use super::Actor;

/// A movie in the catalog. Its cast lives in the same join table as
/// an actor's filmography.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: RecordId,
    pub name: String,
    pub year: i64,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieCreate {
    pub name: String,
    pub year: i64,
    pub genre: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieUpdate {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub genre: Option<String>,
}

impl Entity for Movie {
    const KIND: &'static str = "Movie";
    const TABLE: &'static str = "movies";
    const LINK_COLUMN: &'static str = "movie_id";
    type Create = MovieCreate;
    type Update = MovieUpdate;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create_values(params: MovieCreate) -> Assignments {
        vec![
            ("name", FieldValue::Text(params.name)),
            ("year", FieldValue::Integer(params.year)),
            ("genre", FieldValue::Text(params.genre)),
        ]
    }

    fn update_values(update: MovieUpdate) -> Assignments {
        [
            update.name.map(|name| ("name", FieldValue::Text(name))),
            update.year.map(|year| ("year", FieldValue::Integer(year))),
            update.genre.map(|genre| ("genre", FieldValue::Text(genre))),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: RecordId(row.try_get("id")?),
            name: row.try_get("name")?,
            year: row.try_get("year")?,
            genre: row.try_get("genre")?,
        })
    }
}

impl Associated for Movie {
    type Counterpart = Actor;
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Movie {}: {} ({})>", self.id, self.name, self.year)
    }
}
