//! Request handlers. Each one is generic over the record client it serves, so the actor
//! and movie routes share a single implementation.

use super::error::ApiError;
use super::AppState;
use crate::clients::RecordClient;
use crate::view::Present;
use axum::body::Bytes;
use axum::extract::{FromRef, Query, State};
use axum::Json;
use record_store::RawFields;
use serde::Serialize;
use serde_json::Value;

type View<C> = <<C as RecordClient>::Record as Present>::View;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Collects request fields from the query string and a JSON object body.
/// Body values win over query values. Non-string JSON values are kept in their JSON text
/// form; `null` counts as absent.
pub fn request_fields(query: RawFields, body: &[u8]) -> Result<RawFields, ApiError> {
    let mut fields = query;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(fields);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}")))?;
    let Value::Object(map) = value else {
        return Err(ApiError::bad_request("Request body must be a JSON object"));
    };
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text,
            other => other.to_string(),
        };
        fields.insert(key, text);
    }
    Ok(fields)
}

pub async fn list_all<C>(State(client): State<C>) -> Result<Json<Vec<View<C>>>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    Ok(Json(client.list_all().await?))
}

pub async fn get_by_id<C>(
    State(client): State<C>,
    Query(query): Query<RawFields>,
    body: Bytes,
) -> Result<Json<View<C>>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    let fields = request_fields(query, &body)?;
    Ok(Json(client.get_by_id(&fields).await?))
}

pub async fn add<C>(
    State(client): State<C>,
    Query(query): Query<RawFields>,
    body: Bytes,
) -> Result<Json<View<C>>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    let fields = request_fields(query, &body)?;
    Ok(Json(client.add(&fields).await?))
}

pub async fn update<C>(
    State(client): State<C>,
    Query(query): Query<RawFields>,
    body: Bytes,
) -> Result<Json<View<C>>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    let fields = request_fields(query, &body)?;
    Ok(Json(client.update(&fields).await?))
}

pub async fn delete<C>(
    State(client): State<C>,
    Query(query): Query<RawFields>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    let fields = request_fields(query, &body)?;
    client.delete(&fields).await?;
    Ok(Json(MessageResponse {
        message: "Record successfully deleted".to_string(),
    }))
}

pub async fn add_relation<C>(
    State(client): State<C>,
    Query(query): Query<RawFields>,
    body: Bytes,
) -> Result<Json<View<C>>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    let fields = request_fields(query, &body)?;
    Ok(Json(client.add_relation(&fields).await?))
}

pub async fn clear_relations<C>(
    State(client): State<C>,
    Query(query): Query<RawFields>,
    body: Bytes,
) -> Result<Json<View<C>>, ApiError>
where
    C: RecordClient + Clone + FromRef<AppState> + 'static,
{
    let fields = request_fields(query, &body)?;
    Ok(Json(client.clear_relations(&fields).await?))
}
