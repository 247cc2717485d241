//! Book endpoints: create and list, with an optional author filter.

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use sqlx::PgPool;

use super::super::ApiError;
use super::{
    storage::{fetch_author, fetch_books, insert_book},
    types::{BookListParams, BookResponse, CreateBookRequest},
};

#[utoipa::path(
    post,
    path = "/books/",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created.", body = BookResponse),
        (status = 404, description = "Author not found.", body = String),
        (status = 422, description = "Payload does not match the book shape.", body = String),
    ),
    tag = "books"
)]
/// Creates a book after resolving `author_id` to an existing author.
/// The existence check is a read before the insert; the foreign key only
/// acts as a backstop.
pub async fn create_book(
    pool: Extension<PgPool>,
    Json(payload): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if fetch_author(&pool, payload.author_id).await?.is_none() {
        return Err(ApiError::NotFound("Author not found"));
    }

    let book = insert_book(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    get,
    path = "/books/",
    params(BookListParams),
    responses(
        (status = 200, description = "Page of books, optionally filtered by author.", body = [BookResponse]),
        (status = 422, description = "Pagination bounds violated.", body = String),
    ),
    tag = "books"
)]
/// Lists books in insertion order using offset pagination. When `author_id`
/// is given, only books referencing that author are returned; an unknown
/// author yields an empty page, not `404`.
pub async fn list_books(
    pool: Extension<PgPool>,
    query: Result<Query<BookListParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query.map_err(|err| ApiError::Validation(err.body_text()))?;
    let page = params.page()?;

    let books = fetch_books(&pool, page, params.author_id).await?;

    Ok((StatusCode::OK, Json(books)))
}
