//! # Relationship Manager
//!
//! Keeps a many-to-many association symmetric. A link is one row of the schema's join
//! table, so both records see it as soon as it exists and lose it as soon as it is gone.
//! Callers run these functions inside a transaction; a failure leaves the join table as it
//! was.
//!
//! The association is a set: the join table is keyed by both columns and linking a pair
//! that is already linked changes nothing.

use crate::entity::{Associated, Entity, RecordId};
use crate::error::StoreError;
use crate::records;
use crate::schema::{Member, Schema};
use sqlx::sqlite::SqliteConnection;

/// A record together with the records it is currently linked to.
#[derive(Debug, Clone)]
pub struct Linked<T: Associated> {
    pub record: T,
    pub counterparts: Vec<T::Counterpart>,
}

/// Links `id` with the counterpart `target`.
pub async fn link<S: Schema, T: Member<S>>(
    conn: &mut SqliteConnection,
    id: RecordId,
    target: RecordId,
) -> Result<Linked<T>, StoreError> {
    let record = records::fetch::<T>(&mut *conn, id)
        .await?
        .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
    if records::fetch::<T::Counterpart>(&mut *conn, target)
        .await?
        .is_none()
    {
        return Err(StoreError::RelationNotFound {
            kind: <T::Counterpart as Entity>::KIND,
            id: target,
        });
    }

    let sql = format!(
        "INSERT OR IGNORE INTO {} ({}, {}) VALUES (?, ?)",
        S::LINK_TABLE,
        T::LINK_COLUMN,
        <T::Counterpart as Entity>::LINK_COLUMN
    );
    sqlx::query(&sql)
        .bind(id.get())
        .bind(target.get())
        .execute(&mut *conn)
        .await?;

    let counterparts = counterparts::<S, T>(&mut *conn, id).await?;
    Ok(Linked {
        record,
        counterparts,
    })
}

/// Removes every link of `id`.
pub async fn clear<S: Schema, T: Member<S>>(
    conn: &mut SqliteConnection,
    id: RecordId,
) -> Result<Linked<T>, StoreError> {
    let record = records::fetch::<T>(&mut *conn, id)
        .await?
        .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
    detach::<S, T>(&mut *conn, id).await?;
    Ok(Linked {
        record,
        counterparts: Vec::new(),
    })
}

/// Deletes the join rows of `id`. Returns how many links were dropped.
pub async fn detach<S: Schema, T: Member<S>>(
    conn: &mut SqliteConnection,
    id: RecordId,
) -> Result<u64, StoreError> {
    let sql = format!("DELETE FROM {} WHERE {} = ?", S::LINK_TABLE, T::LINK_COLUMN);
    let result = sqlx::query(&sql).bind(id.get()).execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

/// The records linked to `id`, ascending by id.
pub async fn counterparts<S: Schema, T: Member<S>>(
    conn: &mut SqliteConnection,
    id: RecordId,
) -> Result<Vec<T::Counterpart>, StoreError> {
    let sql = format!(
        "SELECT c.* FROM {other} c JOIN {link} l ON l.{other_column} = c.id \
         WHERE l.{own_column} = ? ORDER BY c.id",
        other = <T::Counterpart as Entity>::TABLE,
        link = S::LINK_TABLE,
        other_column = <T::Counterpart as Entity>::LINK_COLUMN,
        own_column = T::LINK_COLUMN,
    );
    let rows = sqlx::query(&sql)
        .bind(id.get())
        .fetch_all(&mut *conn)
        .await?;
    let linked = rows
        .iter()
        .map(<T::Counterpart as Entity>::from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(linked)
}
