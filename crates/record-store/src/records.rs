//! Generic row access for any [`Entity`].
//!
//! Every function works on one connection, so the caller decides whether it runs inside a
//! transaction. Table and column names come from the entity's constants; values are always
//! bound.

use crate::entity::{Entity, RecordId};
use crate::error::StoreError;
use crate::validation::FieldValue;
use sqlx::sqlite::SqliteConnection;
use sqlx::{QueryBuilder, Sqlite};

fn push_value(query: &mut QueryBuilder<'_, Sqlite>, value: FieldValue) {
    match value {
        FieldValue::Text(text) => query.push_bind(text),
        FieldValue::Integer(number) => query.push_bind(number),
        FieldValue::Date(date) => query.push_bind(date),
    };
}

/// Inserts a record and returns it with the id the database assigned.
pub async fn insert<T: Entity>(
    conn: &mut SqliteConnection,
    params: T::Create,
) -> Result<T, StoreError> {
    let values = T::create_values(params);

    let mut query = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (", T::TABLE));
    for (i, (column, _)) in values.iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        query.push(*column);
    }
    query.push(") VALUES (");
    for (i, (_, value)) in values.into_iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        push_value(&mut query, value);
    }
    query.push(") RETURNING *");

    let row = query.build().fetch_one(&mut *conn).await?;
    Ok(T::from_row(&row)?)
}

pub async fn fetch<T: Entity>(
    conn: &mut SqliteConnection,
    id: RecordId,
) -> Result<Option<T>, StoreError> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
    let row = sqlx::query(&sql)
        .bind(id.get())
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.as_ref().map(T::from_row).transpose()?)
}

/// Every record, ascending by id.
pub async fn fetch_all<T: Entity>(conn: &mut SqliteConnection) -> Result<Vec<T>, StoreError> {
    let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
    let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
    let records = rows.iter().map(T::from_row).collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Writes the columns named by `update`. `None` when the id is unknown.
pub async fn update<T: Entity>(
    conn: &mut SqliteConnection,
    id: RecordId,
    update: T::Update,
) -> Result<Option<T>, StoreError> {
    let values = T::update_values(update);
    if values.is_empty() {
        return fetch::<T>(conn, id).await;
    }

    let mut query = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", T::TABLE));
    for (i, (column, value)) in values.into_iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        query.push(column).push(" = ");
        push_value(&mut query, value);
    }
    query.push(" WHERE id = ");
    query.push_bind(id.get());
    query.push(" RETURNING *");

    let row = query.build().fetch_optional(&mut *conn).await?;
    Ok(row.as_ref().map(T::from_row).transpose()?)
}

/// Removes the row. Returns whether it existed.
pub async fn delete<T: Entity>(
    conn: &mut SqliteConnection,
    id: RecordId,
) -> Result<bool, StoreError> {
    let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
    let result = sqlx::query(&sql).bind(id.get()).execute(&mut *conn).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count<T: Entity>(conn: &mut SqliteConnection) -> Result<i64, StoreError> {
    let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
    let count = sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}
