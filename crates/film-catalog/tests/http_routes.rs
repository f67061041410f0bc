use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use film_catalog::http::{router, AppState};
use film_catalog::lifecycle::CatalogSystem;
use record_store::StoreConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> (CatalogSystem, Router) {
    let system = CatalogSystem::start(&StoreConfig::default())
        .await
        .expect("Failed to start catalog");
    let app = router(AppState::new(&system));
    (system, app)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_movie_routes() {
    let (_system, app) = app().await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/movie",
        Some(json!({"name": "Inception", "year": 2010, "genre": "Sci-Fi"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Inception", "year": 2010, "genre": "Sci-Fi"})
    );

    let (status, body) = call(&app, Method::GET, "/api/movie?id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Inception");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/movie",
        Some(json!({"id": 1, "genre": "Thriller"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["genre"], "Thriller");

    let (status, body) = call(&app, Method::GET, "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = call(&app, Method::DELETE, "/api/movie?id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Record successfully deleted"}));

    let (status, body) = call(&app, Method::GET, "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_relation_routes() {
    let (_system, app) = app().await;

    call(
        &app,
        Method::POST,
        "/api/actor",
        Some(json!({"name": "Leo", "gender": "male", "date_of_birth": "1974-11-11"})),
    )
    .await;
    call(
        &app,
        Method::POST,
        "/api/movie",
        Some(json!({"name": "Inception", "year": "2010", "genre": "Sci-Fi"})),
    )
    .await;

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/actor-relations",
        Some(json!({"id": 1, "relation_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date_of_birth"], "1974-11-11");
    assert_eq!(body["filmography"], json!(["<Movie 1: Inception (2010)>"]));

    let (status, body) = call(&app, Method::DELETE, "/api/movie-relations?id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cast"], json!([]));
}

#[tokio::test]
async fn test_errors_are_rendered_as_json() {
    let (_system, app) = app().await;

    let (status, body) = call(&app, Method::GET, "/api/actor?id=5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Record with such id does not exist"}));

    let (status, body) = call(&app, Method::GET, "/api/actor?id=five", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "id must be integer"}));

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/actor",
        Some(json!({"name": "Leo", "gender": "male"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields: date_of_birth"}));

    let (status, body) = call(&app, Method::POST, "/api/movie", Some(json!(["Inception"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Request body must be a JSON object"}));
}
