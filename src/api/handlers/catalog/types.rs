//! Request/response types for the catalog API.
//!
//! These payloads are shared between handlers and `OpenAPI` generation.
//! Optional fields are `Option<T>` and serialize as `null`, never omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::super::ApiError;
use super::{LIMIT_DEFAULT, LIMIT_MAX, SKIP_DEFAULT};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: String,
    pub summary: Option<String>,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub publication_date: Option<NaiveDate>,
    pub author_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub author_id: i64,
}

/// Author expanded with its books. Reusable contract only: no endpoint
/// returns it in the current API surface.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorWithBooks {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub books: Vec<BookResponse>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Rows to skip before the page starts (default 0).
    pub skip: Option<i64>,
    /// Page size, 1 to 100 (default 100).
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookListParams {
    /// Rows to skip before the page starts (default 0).
    pub skip: Option<i64>,
    /// Page size, 1 to 100 (default 100).
    pub limit: Option<i64>,
    /// Restrict the page to books referencing this author.
    pub author_id: Option<i64>,
}

/// Validated offset pagination, ready to bind into a query.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Page {
    pub skip: i64,
    pub limit: i64,
}

/// Applies defaults and bounds: skip >= 0, 1 <= limit <= 100.
/// Violations are rejected here, before any storage access.
pub(crate) fn validate_page(skip: Option<i64>, limit: Option<i64>) -> Result<Page, ApiError> {
    let skip = skip.unwrap_or(SKIP_DEFAULT);
    let limit = limit.unwrap_or(LIMIT_DEFAULT);

    if skip < 0 {
        return Err(ApiError::Validation(
            "skip must be greater than or equal to 0".to_string(),
        ));
    }

    if !(1..=LIMIT_MAX).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {LIMIT_MAX}"
        )));
    }

    Ok(Page { skip, limit })
}

impl ListParams {
    pub(crate) fn page(&self) -> Result<Page, ApiError> {
        validate_page(self.skip, self.limit)
    }
}

impl BookListParams {
    pub(crate) fn page(&self) -> Result<Page, ApiError> {
        validate_page(self.skip, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults() {
        let page = validate_page(None, None).expect("defaults should validate");
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn page_accepts_bounds() {
        assert!(validate_page(Some(0), Some(1)).is_ok());
        assert!(validate_page(Some(0), Some(100)).is_ok());
        assert!(validate_page(Some(1_000_000), Some(50)).is_ok());
    }

    #[test]
    fn page_rejects_negative_skip() {
        assert!(validate_page(Some(-1), None).is_err());
    }

    #[test]
    fn page_rejects_limit_out_of_range() {
        assert!(validate_page(None, Some(0)).is_err());
        assert!(validate_page(None, Some(101)).is_err());
        assert!(validate_page(None, Some(-5)).is_err());
    }

    #[test]
    fn author_response_serializes_missing_bio_as_null() {
        let author = AuthorResponse {
            id: 1,
            name: "Jane Austen".to_string(),
            bio: None,
        };
        let value = serde_json::to_value(&author).expect("serialize author");
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Jane Austen", "bio": null})
        );
    }

    #[test]
    fn book_request_rejects_invalid_date() {
        let payload = serde_json::json!({
            "title": "Emma",
            "author_id": 1,
            "publication_date": "not-a-date"
        });
        let result: Result<CreateBookRequest, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn book_request_requires_author_id() {
        let payload = serde_json::json!({"title": "Emma"});
        let result: Result<CreateBookRequest, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn book_response_uses_iso_dates() {
        let book = BookResponse {
            id: 1,
            title: "Emma".to_string(),
            summary: None,
            publication_date: NaiveDate::from_ymd_opt(1815, 12, 23),
            author_id: 1,
        };
        let value = serde_json::to_value(&book).expect("serialize book");
        assert_eq!(value["publication_date"], "1815-12-23");
        assert_eq!(value["summary"], serde_json::Value::Null);
    }
}
