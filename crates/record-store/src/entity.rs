//! # Entity Traits
//!
//! Every record kind managed by a [`RecordStore`](crate::RecordStore) implements [`Entity`].
//! It names the table the records live in, the DTOs used to create and update them, and
//! how a row is read back. The database assigns ids; entities never pick their own.
//!
//! Record kinds that take part in a many-to-many association additionally implement
//! [`Associated`]. The links themselves are rows of the schema's join table, never fields
//! of the record, so the relationship manager can keep an actor's filmography and a
//! movie's cast in sync with one insert or delete.

use crate::validation::FieldValue;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use std::fmt::{self, Debug, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// Database-assigned identity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(RecordId)
    }
}

/// Column values written by an insert or update, in column order.
pub type Assignments = Vec<(&'static str, FieldValue)>;

/// Trait that any record kind must implement to be stored by a [`Database`](crate::Database).
///
/// `Create` carries every mandatory attribute. `Update` carries optional replacements;
/// fields left as `None` keep their previous value. Association links belong to neither
/// DTO and can only be changed through the relationship manager.
pub trait Entity: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Human readable kind, used in logs and error messages.
    const KIND: &'static str;

    /// Table holding the records. Its primary key column is `id`.
    const TABLE: &'static str;

    /// Column of the join table that references this kind.
    const LINK_COLUMN: &'static str;

    type Create: Debug + Send + 'static;
    type Update: Debug + Send + 'static;

    fn id(&self) -> RecordId;

    /// Every column written when a record is created.
    fn create_values(params: Self::Create) -> Assignments;

    /// Only the columns `update` replaces. Empty when nothing changes.
    fn update_values(update: Self::Update) -> Assignments;

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

/// Capability of a record kind that holds one side of a symmetric many-to-many association.
pub trait Associated: Entity {
    /// The record kind on the other side of the association.
    type Counterpart: Associated;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_trimmed_integers() {
        assert_eq!(" 42 ".parse::<RecordId>().unwrap(), RecordId(42));
        assert_eq!("-3".parse::<RecordId>().unwrap(), RecordId(-3));
        assert!("abc".parse::<RecordId>().is_err());
        assert!("1.5".parse::<RecordId>().is_err());
    }

    #[test]
    fn record_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&RecordId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
