use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        many_side::{
            KeywordMatchDto, ManySideDetailDto, ManySideDto, ManySideInputDto,
            ManySideWithOwnerDto,
        },
        one_side::{CreateOneSideDto, OneSideDto, OwnerDto},
        report::OwnerPrepTimeDto,
    },
    server::{
        controller::{
            many_side::{self, MANY_SIDE_TAG},
            one_side::{self, ONE_SIDE_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        one_side::get_all,
        one_side::create,
        one_side::delete,
        one_side::delete_cascading,
        many_side::get_all,
        many_side::get_by_id,
        many_side::search,
        many_side::report,
        many_side::get_paginated,
        many_side::get_paginated_filtered,
        many_side::create,
        many_side::update,
        many_side::replace,
        many_side::delete,
    ),
    components(schemas(
        ErrorDto,
        OneSideDto,
        OwnerDto,
        CreateOneSideDto,
        ManySideDto,
        ManySideWithOwnerDto,
        ManySideDetailDto,
        KeywordMatchDto,
        ManySideInputDto,
        OwnerPrepTimeDto,
    )),
    tags(
        (name = ONE_SIDE_TAG, description = "One-side records"),
        (name = MANY_SIDE_TAG, description = "Many-side records referencing a one-side record"),
    )
)]
pub struct ApiDoc;

/// API routes without state or middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/xyzOne", get(one_side::get_all).post(one_side::create))
        .route("/api/xyzOne/{id}", delete(one_side::delete))
        .route(
            "/api/xyzOne/transaction/{id}",
            delete(one_side::delete_cascading),
        )
        .route("/api/xyzMany", get(many_side::get_all).post(many_side::create))
        .route(
            "/api/xyzMany/{id}",
            get(many_side::get_by_id)
                .patch(many_side::update)
                .put(many_side::replace)
                .delete(many_side::delete),
        )
        .route("/api/xyzMany/keyword/{keyword}", get(many_side::search))
        .route("/api/xyzMany-Group-By", get(many_side::report))
        // `{id}` is the offset here; sibling routes must share the parameter name.
        .route(
            "/api/xyzMany/{id}/{limit}/{sorting_field}",
            get(many_side::get_paginated),
        )
        // An empty filter segment lists the unfiltered page.
        .route(
            "/api/xyzMany/{id}/{limit}/{sorting_field}/",
            get(many_side::get_paginated),
        )
        .route(
            "/api/xyzMany/{id}/{limit}/{sorting_field}/{filter}",
            get(many_side::get_paginated_filtered),
        )
}

/// Builds the complete application: API routes, OpenAPI docs, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
