use super::handlers::{catalog, health};
use utoipa::openapi::{InfoBuilder, OpenApiBuilder, Tag};
use utoipa::{PartialSchema, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI spec.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` spec.
/// Routes added outside (like `/` and the Swagger UI) are intentionally not
/// documented.
pub(crate) fn api_router() -> OpenApiRouter {
    // `routes!` reads #[utoipa::path] to bind HTTP method + path and add the route to OpenAPI.
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(
            catalog::authors::create_author,
            catalog::authors::list_authors
        ))
        .routes(routes!(catalog::authors::get_author))
        .routes(routes!(
            catalog::books::create_book,
            catalog::books::list_books
        ));

    let mut authors_tag = Tag::new("authors");
    authors_tag.description = Some("Author catalog entries".to_string());

    let mut books_tag = Tag::new("books");
    books_tag.description = Some("Books referencing their authors".to_string());

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Service and database health".to_string());

    let doc = router.get_openapi_mut();
    doc.tags = Some(vec![authors_tag, books_tag, health_tag]);

    // AuthorWithBooks is a reusable contract for clients that expand an
    // author with its books; no endpoint returns it, so it is registered
    // here instead of being picked up from a handler signature.
    let components = doc.components.get_or_insert_with(Default::default);
    components.schemas.insert(
        catalog::types::AuthorWithBooks::name().into_owned(),
        catalog::types::AuthorWithBooks::schema(),
    );

    router
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    // Use Cargo.toml metadata instead of the utoipa-axum crate info defaults.
    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    OpenApiBuilder::new().info(info).build()
}
