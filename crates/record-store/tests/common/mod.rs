//! A two-kind schema shared by the integration tests.

#![allow(dead_code)]

use record_store::{
    Assignments, Associated, Entity, FieldValue, Member, RecordId, ResourceRequest, Schema,
    StoreRequest,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AuthorCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    pub year: i64,
}

#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub year: i64,
}

#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub year: Option<i64>,
}

impl Entity for Author {
    const KIND: &'static str = "Author";
    const TABLE: &'static str = "authors";
    const LINK_COLUMN: &'static str = "author_id";
    type Create = AuthorCreate;
    type Update = AuthorUpdate;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create_values(params: AuthorCreate) -> Assignments {
        vec![("name", FieldValue::Text(params.name))]
    }

    fn update_values(update: AuthorUpdate) -> Assignments {
        update
            .name
            .map(|name| ("name", FieldValue::Text(name)))
            .into_iter()
            .collect()
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: RecordId(row.try_get("id")?),
            name: row.try_get("name")?,
        })
    }
}

impl Associated for Author {
    type Counterpart = Book;
}

impl Entity for Book {
    const KIND: &'static str = "Book";
    const TABLE: &'static str = "books";
    const LINK_COLUMN: &'static str = "book_id";
    type Create = BookCreate;
    type Update = BookUpdate;

    fn id(&self) -> RecordId {
        self.id
    }

    fn create_values(params: BookCreate) -> Assignments {
        vec![
            ("title", FieldValue::Text(params.title)),
            ("year", FieldValue::Integer(params.year)),
        ]
    }

    fn update_values(update: BookUpdate) -> Assignments {
        let mut values = Assignments::new();
        if let Some(title) = update.title {
            values.push(("title", FieldValue::Text(title)));
        }
        if let Some(year) = update.year {
            values.push(("year", FieldValue::Integer(year)));
        }
        values
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: RecordId(row.try_get("id")?),
            title: row.try_get("title")?,
            year: row.try_get("year")?,
        })
    }
}

impl Associated for Book {
    type Counterpart = Author;
}

pub struct Library;

impl Schema for Library {
    type Left = Author;
    type Right = Book;

    const LINK_TABLE: &'static str = "author_book";

    const MIGRATIONS: &'static [&'static str] = &[
        "CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            year INTEGER NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS author_book (
            author_id INTEGER NOT NULL REFERENCES authors(id),
            book_id INTEGER NOT NULL REFERENCES books(id),
            PRIMARY KEY (author_id, book_id)
        )",
    ];
}

impl Member<Library> for Author {
    fn envelope(request: ResourceRequest<Author>) -> StoreRequest<Library> {
        StoreRequest::Left(request)
    }

    fn open(
        request: StoreRequest<Library>,
    ) -> Result<ResourceRequest<Author>, StoreRequest<Library>> {
        match request {
            StoreRequest::Left(request) => Ok(request),
            other => Err(other),
        }
    }
}

impl Member<Library> for Book {
    fn envelope(request: ResourceRequest<Book>) -> StoreRequest<Library> {
        StoreRequest::Right(request)
    }

    fn open(
        request: StoreRequest<Library>,
    ) -> Result<ResourceRequest<Book>, StoreRequest<Library>> {
        match request {
            StoreRequest::Right(request) => Ok(request),
            other => Err(other),
        }
    }
}

pub fn author(name: &str) -> AuthorCreate {
    AuthorCreate {
        name: name.to_string(),
    }
}

pub fn book(title: &str, year: i64) -> BookCreate {
    BookCreate {
        title: title.to_string(),
        year,
    }
}

pub fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}
