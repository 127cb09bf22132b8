use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        one_side::{CreateOneSideDto, OneSideDto},
    },
    server::{error::AppError, service::one_side::OneSideService, state::AppState},
};

/// Tag for grouping one-side endpoints in OpenAPI documentation
pub static ONE_SIDE_TAG: &str = "xyzOne";

/// List all one-side records.
///
/// # Returns
/// - `200 OK` - Every one-side record ordered by id
/// - `400 Bad Request` - Database error
#[utoipa::path(
    get,
    path = "/api/xyzOne",
    tag = ONE_SIDE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved records", body = Vec<OneSideDto>),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OneSideService::new(&state.db);

    let records = service.get_all().await?;

    let dtos: Vec<OneSideDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok(Json(dtos))
}

/// Create a one-side record.
///
/// The new record gets the id following the current maximum, or 1 when the
/// collection is empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Record fields (`name`, `email`)
///
/// # Returns
/// - `201 Created` - The stored record including its assigned id
/// - `400 Bad Request` - Missing field, malformed body or database error
#[utoipa::path(
    post,
    path = "/api/xyzOne",
    tag = ONE_SIDE_TAG,
    request_body = CreateOneSideDto,
    responses(
        (status = 201, description = "Successfully created record", body = OneSideDto),
        (status = 400, description = "Invalid record data", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateOneSideDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = OneSideService::new(&state.db);

    let record = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Delete a one-side record that nothing references.
///
/// # Returns
/// - `204 No Content` - Record deleted
/// - `403 Forbidden` - At least one many-side record references it
/// - `404 Not Found` - No record with the given id
/// - `400 Bad Request` - Invalid id or database error
#[utoipa::path(
    delete,
    path = "/api/xyzOne/{id}",
    tag = ONE_SIDE_TAG,
    params(
        ("id" = i32, Path, description = "One-side record id")
    ),
    responses(
        (status = 204, description = "Successfully deleted record"),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 403, description = "Record is still referenced", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = OneSideService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a one-side record together with every record referencing it.
///
/// Runs as a single transaction; on failure nothing is removed.
///
/// # Returns
/// - `204 No Content` - Record and dependents deleted
/// - `404 Not Found` - No record with the given id
/// - `400 Bad Request` - Invalid id or database error
#[utoipa::path(
    delete,
    path = "/api/xyzOne/transaction/{id}",
    tag = ONE_SIDE_TAG,
    params(
        ("id" = i32, Path, description = "One-side record id")
    ),
    responses(
        (status = 204, description = "Successfully deleted record and dependents"),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto)
    ),
)]
pub async fn delete_cascading(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = OneSideService::new(&state.db);

    service.delete_cascading(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
