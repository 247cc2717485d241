//! SQL storage helpers for the catalog.
//!
//! These functions perform single-statement reads and writes against the
//! pool and map rows into response DTOs. Cross-entity checks (name
//! uniqueness, author existence) belong to the handlers, not here.

use sqlx::{postgres::PgRow, PgPool, Row};

use super::types::{AuthorResponse, AuthorWithBooks, BookResponse, CreateBookRequest, Page};

/// Inserts an author and returns it with the assigned identifier.
/// Assumes the caller already checked the name for uniqueness.
pub(super) async fn insert_author(
    pool: &PgPool,
    name: &str,
    bio: Option<&str>,
) -> Result<AuthorResponse, sqlx::Error> {
    let row = sqlx::query(
        r"
        INSERT INTO authors (name, bio)
        VALUES ($1, $2)
        RETURNING id, name, bio
        ",
    )
    .bind(name)
    .bind(bio)
    .fetch_one(pool)
    .await?;

    Ok(author_from_row(&row))
}

/// Returns `true` when an author with this exact name already exists.
pub(super) async fn author_name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM authors WHERE name = $1) AS exists")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(row.get("exists"))
}

/// Fetches an author by id, returning `None` when absent.
pub(super) async fn fetch_author(
    pool: &PgPool,
    id: i64,
) -> Result<Option<AuthorResponse>, sqlx::Error> {
    let row = sqlx::query("SELECT id, name, bio FROM authors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(author_from_row))
}

/// Returns one page of authors in insertion (id) order.
pub(super) async fn fetch_authors(
    pool: &PgPool,
    page: Page,
) -> Result<Vec<AuthorResponse>, sqlx::Error> {
    let rows = sqlx::query(
        r"
        SELECT id, name, bio
        FROM authors
        ORDER BY id
        LIMIT $1 OFFSET $2
        ",
    )
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(author_from_row).collect())
}

/// Inserts a book and returns it with the assigned identifier.
/// Assumes the caller already resolved `author_id` to an existing author.
pub(super) async fn insert_book(
    pool: &PgPool,
    book: &CreateBookRequest,
) -> Result<BookResponse, sqlx::Error> {
    let row = sqlx::query(
        r"
        INSERT INTO books (title, summary, publication_date, author_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, summary, publication_date, author_id
        ",
    )
    .bind(&book.title)
    .bind(&book.summary)
    .bind(book.publication_date)
    .bind(book.author_id)
    .fetch_one(pool)
    .await?;

    Ok(book_from_row(&row))
}

/// Returns one page of books in insertion (id) order, optionally restricted
/// to a single author.
pub(super) async fn fetch_books(
    pool: &PgPool,
    page: Page,
    author_id: Option<i64>,
) -> Result<Vec<BookResponse>, sqlx::Error> {
    let rows = sqlx::query(
        r"
        SELECT id, title, summary, publication_date, author_id
        FROM books
        WHERE $1::BIGINT IS NULL OR author_id = $1
        ORDER BY id
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(author_id)
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(book_from_row).collect())
}

/// Fetches an author together with every book referencing it.
/// Backs the `AuthorWithBooks` contract; not exposed by any route yet.
pub(super) async fn fetch_author_with_books(
    pool: &PgPool,
    id: i64,
) -> Result<Option<AuthorWithBooks>, sqlx::Error> {
    let Some(author) = fetch_author(pool, id).await? else {
        return Ok(None);
    };

    let rows = sqlx::query(
        r"
        SELECT id, title, summary, publication_date, author_id
        FROM books
        WHERE author_id = $1
        ORDER BY id
        ",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(AuthorWithBooks {
        id: author.id,
        name: author.name,
        bio: author.bio,
        books: rows.iter().map(book_from_row).collect(),
    }))
}

fn author_from_row(row: &PgRow) -> AuthorResponse {
    AuthorResponse {
        id: row.get("id"),
        name: row.get("name"),
        bio: row.get("bio"),
    }
}

fn book_from_row(row: &PgRow) -> BookResponse {
    BookResponse {
        id: row.get("id"),
        title: row.get("title"),
        summary: row.get("summary"),
        publication_date: row.get("publication_date"),
        author_id: row.get("author_id"),
    }
}
