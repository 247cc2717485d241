//! Author endpoints: create, list, and fetch by id.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use sqlx::PgPool;

use super::super::ApiError;
use super::{
    storage::{author_name_exists, fetch_author, fetch_authors, insert_author},
    types::{AuthorResponse, CreateAuthorRequest, ListParams},
};

#[utoipa::path(
    post,
    path = "/authors/",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created.", body = AuthorResponse),
        (status = 400, description = "Author with this name already exists.", body = String),
        (status = 422, description = "Payload does not match the author shape.", body = String),
    ),
    tag = "authors"
)]
/// Creates an author after checking that no other author carries the same
/// name. The check is a read before the insert, not a storage constraint.
pub async fn create_author(
    pool: Extension<PgPool>,
    Json(payload): Json<CreateAuthorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if author_name_exists(&pool, &payload.name).await? {
        return Err(ApiError::Conflict("Author with this name already exists"));
    }

    let author = insert_author(&pool, &payload.name, payload.bio.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(author)))
}

#[utoipa::path(
    get,
    path = "/authors/",
    params(ListParams),
    responses(
        (status = 200, description = "Page of authors.", body = [AuthorResponse]),
        (status = 422, description = "Pagination bounds violated.", body = String),
    ),
    tag = "authors"
)]
/// Lists authors in insertion order using offset pagination.
/// Bound violations are rejected before any storage access.
pub async fn list_authors(
    pool: Extension<PgPool>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query.map_err(|err| ApiError::Validation(err.body_text()))?;
    let page = params.page()?;

    let authors = fetch_authors(&pool, page).await?;

    Ok((StatusCode::OK, Json(authors)))
}

#[utoipa::path(
    get,
    path = "/authors/{author_id}",
    params(("author_id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "Author detail.", body = AuthorResponse),
        (status = 404, description = "Author not found.", body = String),
    ),
    tag = "authors"
)]
/// Fetches a single author by id. An absent id is `404`, not an error.
pub async fn get_author(
    path: Result<Path<i64>, PathRejection>,
    pool: Extension<PgPool>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(author_id) = path.map_err(|err| ApiError::Validation(err.body_text()))?;

    match fetch_author(&pool, author_id).await? {
        Some(author) => Ok((StatusCode::OK, Json(author))),
        None => Err(ApiError::NotFound("Author not found")),
    }
}
