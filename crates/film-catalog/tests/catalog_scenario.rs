mod common;

use chrono::NaiveDate;
use common::{fields, inception, leo};
use film_catalog::clients::RecordClient;
use film_catalog::error::CatalogError;
use film_catalog::lifecycle::CatalogSystem;
use record_store::{RecordId, StoreConfig, StoreError, ValidationError};
use tempfile::TempDir;

async fn start() -> CatalogSystem {
    CatalogSystem::start(&StoreConfig::default())
        .await
        .expect("Failed to start catalog")
}

/// Full walk through the catalog: create both kinds, link them from either side, clear.
#[tokio::test]
async fn test_link_and_clear_from_both_sides() {
    let system = start().await;

    let movie = system.movies.add(&inception()).await.expect("Failed to add movie");
    assert_eq!(movie.id, RecordId(1));
    assert_eq!(movie.year, 2010);
    assert_eq!(movie.cast, None);

    let actor = system.actors.add(&leo()).await.expect("Failed to add actor");
    assert_eq!(actor.id, RecordId(1));
    assert_eq!(
        actor.date_of_birth,
        NaiveDate::from_ymd_opt(1974, 11, 11).unwrap()
    );

    let linked = system
        .actors
        .add_relation(&fields(&[("id", "1"), ("relation_id", "1")]))
        .await
        .expect("Failed to link actor");
    assert_eq!(
        linked.filmography,
        Some(vec!["<Movie 1: Inception (2010)>".to_string()])
    );

    // The other side sees the link, and adding it again changes nothing
    let linked = system
        .movies
        .add_relation(&fields(&[("id", "1"), ("relation_id", "1")]))
        .await
        .expect("Failed to link movie");
    assert_eq!(linked.cast, Some(vec!["<Actor 1: Leo>".to_string()]));

    let cleared = system
        .movies
        .clear_relations(&fields(&[("id", "1")]))
        .await
        .expect("Failed to clear movie");
    assert_eq!(cleared.cast, Some(vec![]));

    // Clearing is symmetric and can be repeated
    let cleared = system
        .actors
        .clear_relations(&fields(&[("id", "1")]))
        .await
        .expect("Failed to clear actor");
    assert_eq!(cleared.filmography, Some(vec![]));

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_delete_removes_record_from_counterparts() {
    let system = start().await;

    system.movies.add(&inception()).await.unwrap();
    let mut second = inception();
    second.insert("name".to_string(), "Titanic".to_string());
    second.insert("year".to_string(), "1997".to_string());
    system.movies.add(&second).await.unwrap();
    system.actors.add(&leo()).await.unwrap();

    for movie in ["1", "2"] {
        system
            .actors
            .add_relation(&fields(&[("id", "1"), ("relation_id", movie)]))
            .await
            .unwrap();
    }

    let deleted = system.movies.delete(&fields(&[("id", "1")])).await.unwrap();
    assert_eq!(deleted, RecordId(1));

    let err = system.movies.get_by_id(&fields(&[("id", "1")])).await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotFound {
            kind: "Movie",
            id: RecordId(1)
        }
    );

    let actor = system
        .actors
        .add_relation(&fields(&[("id", "1"), ("relation_id", "2")]))
        .await
        .unwrap();
    assert_eq!(
        actor.filmography,
        Some(vec!["<Movie 2: Titanic (1997)>".to_string()])
    );

    // Ids are never reused
    let movie = system.movies.add(&inception()).await.unwrap();
    assert_eq!(movie.id, RecordId(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let system = start().await;
    system.movies.add(&inception()).await.unwrap();

    let updated = system
        .movies
        .update(&fields(&[("id", "1"), ("year", "2011")]))
        .await
        .expect("Failed to update movie");
    assert_eq!(updated.year, 2011);
    assert_eq!(updated.name, "Inception");
    assert_eq!(updated.genre, "Sci-Fi");

    let fetched = system.movies.get_by_id(&fields(&[("id", "1")])).await.unwrap();
    assert_eq!(fetched, updated);

    let all = system.movies.list_all().await.unwrap();
    assert_eq!(all, vec![updated]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_ids_are_reported() {
    let system = start().await;
    system.actors.add(&leo()).await.unwrap();

    let missing = CatalogError::NotFound {
        kind: "Movie",
        id: RecordId(99),
    };
    let id = fields(&[("id", "99")]);

    assert_eq!(system.movies.get_by_id(&id).await.unwrap_err(), missing);
    assert_eq!(system.movies.delete(&id).await.unwrap_err(), missing);
    assert_eq!(
        system.movies.clear_relations(&id).await.unwrap_err(),
        missing
    );
    assert_eq!(
        system
            .movies
            .update(&fields(&[("id", "99"), ("name", "Heat")]))
            .await
            .unwrap_err(),
        missing
    );
    assert_eq!(
        system
            .movies
            .add_relation(&fields(&[("id", "99"), ("relation_id", "1")]))
            .await
            .unwrap_err(),
        missing
    );

    let err = system
        .actors
        .add_relation(&fields(&[("id", "1"), ("relation_id", "99")]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::RelationNotFound {
            kind: "Movie",
            id: RecordId(99)
        }
    );
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "Related record with such id does not exist");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_input() {
    let system = start().await;

    let mut incomplete = leo();
    incomplete.remove("date_of_birth");
    assert_eq!(
        system.actors.add(&incomplete).await.unwrap_err(),
        CatalogError::Validation(ValidationError::MissingFields(vec![
            "date_of_birth".to_string()
        ]))
    );

    let mut extra = leo();
    extra.insert("filmography".to_string(), "1".to_string());
    let err = system.actors.add(&extra).await.unwrap_err();
    assert_eq!(err.to_string(), "Contains extra fields: filmography");

    let mut bad_date = leo();
    bad_date.insert("date_of_birth".to_string(), "11/11/1974".to_string());
    let err = system.actors.add(&bad_date).await.unwrap_err();
    assert_eq!(err.to_string(), "date_of_birth must be in format %Y-%m-%d");

    let err = system
        .movies
        .update(&fields(&[("id", "1"), ("year", "soon")]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "year must be integer");

    let err = system.movies.get_by_id(&fields(&[("id", "one")])).await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::Validation(ValidationError::InvalidId {
            field: "id".to_string()
        })
    );

    let err = system.movies.update(&fields(&[("name", "Heat")])).await.unwrap_err();
    assert_eq!(err.to_string(), "Missing required fields: id");

    let err = system.actors.add_relation(&fields(&[])).await.unwrap_err();
    assert_eq!(err.to_string(), "Missing required fields: id, relation_id");

    // Nothing was stored along the way
    assert!(system.actors.list_all().await.unwrap().is_empty());
    assert!(system.movies.list_all().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sqlite_catalog_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::new(format!(
        "sqlite://{}",
        dir.path().join("catalog.db").display()
    ));

    let system = CatalogSystem::start(&config).await.expect("Failed to open catalog.db");
    system.movies.add(&inception()).await.unwrap();
    system.actors.add(&leo()).await.unwrap();
    system
        .actors
        .add_relation(&fields(&[("id", "1"), ("relation_id", "1")]))
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    let system = CatalogSystem::start(&config).await.expect("Failed to reopen catalog.db");
    let actor = system.actors.get_by_id(&fields(&[("id", "1")])).await.unwrap();
    assert_eq!(actor.name, "Leo");
    let movie = system
        .movies
        .add_relation(&fields(&[("id", "1"), ("relation_id", "1")]))
        .await
        .unwrap();
    assert_eq!(movie.cast, Some(vec!["<Actor 1: Leo>".to_string()]));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unsupported_database_url_is_rejected() {
    let config = StoreConfig::new("postgresql://catalog@localhost/catalog");
    match CatalogSystem::start(&config).await {
        Err(StoreError::Config(message)) => assert!(message.contains("sqlite://")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("postgresql urls are not supported"),
    }
}
