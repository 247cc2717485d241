//! # Librarium (Library Catalog API)
//!
//! `librarium` is a small HTTP/JSON service exposing create, list, and read
//! operations for a library catalog of authors and books, backed by
//! PostgreSQL.
//!
//! ## Catalog Model (Authors, Books)
//!
//! Authors are the primary entity. Each book references exactly one author
//! by id; an author may be referenced by any number of books.
//!
//! - **Author name uniqueness:** enforced as a pre-insert check in the API
//!   layer, not as a storage constraint. Duplicates are rejected with `400`.
//! - **Referential check:** book creation verifies the referenced author
//!   exists and returns `404` otherwise.
//! - **Pagination:** list endpoints are offset-based (`skip`/`limit`, with
//!   `limit` capped at 100) and return page contents only, no totals.
//!
//! Records are immutable once created: the service defines no update or
//! delete operations.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
