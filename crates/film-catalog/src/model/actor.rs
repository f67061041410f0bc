use chrono::NaiveDate;
use record_store::{Assignments, Associated, Entity, FieldValue, RecordId};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::fmt;

use super::Movie;

/// A performer in the catalog.
///
/// The movies an actor appears in are rows of the `actor_movie` join table, not a field
/// of the record. Only the relation operations change them.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: RecordId,
    pub name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
}

/// Payload for creating a new actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorCreate {
    pub name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
}

/// Payload for updating an existing actor. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorUpdate {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Entity for Actor {
    const KIND: &'static str = "Actor";
    const TABLE: &'static str = "actors";
    const LINK_COLUMN: &'static str = "actor_id";
    type Create = ActorCreate;
    type Update = ActorUpdate;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create_values(params: ActorCreate) -> Assignments {
        vec![
            ("name", FieldValue::Text(params.name)),
            ("gender", FieldValue::Text(params.gender)),
            ("date_of_birth", FieldValue::Date(params.date_of_birth)),
        ]
    }

    fn update_values(update: ActorUpdate) -> Assignments {
        let mut values = Assignments::new();
        if let Some(name) = update.name {
            values.push(("name", FieldValue::Text(name)));
        }
        if let Some(gender) = update.gender {
            values.push(("gender", FieldValue::Text(gender)));
        }
        if let Some(date_of_birth) = update.date_of_birth {
            values.push(("date_of_birth", FieldValue::Date(date_of_birth)));
        }
        values
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: RecordId(row.try_get("id")?),
            name: row.try_get("name")?,
            gender: row.try_get("gender")?,
            date_of_birth: row.try_get("date_of_birth")?,
        })
    }
}

impl Associated for Actor {
    type Counterpart = Movie;
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Actor {}: {}>", self.id, self.name)
    }
}
