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
        many_side::{
            KeywordMatchDto, ManySideDetailDto, ManySideDto, ManySideInputDto,
            ManySideWithOwnerDto,
        },
        report::OwnerPrepTimeDto,
    },
    server::{
        error::AppError,
        model::many_side::{ManySidePageQuery, ManySideSort},
        service::many_side::ManySideService,
        state::AppState,
    },
};

/// Tag for grouping many-side endpoints in OpenAPI documentation
pub static MANY_SIDE_TAG: &str = "xyzMany";

/// Response header carrying the size of the whole matching set on paginated listings.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// List all many-side records with their owner embedded.
///
/// # Returns
/// - `200 OK` - Records ordered by id, `FK_neve` holding the owner object
/// - `400 Bad Request` - Database error
#[utoipa::path(
    get,
    path = "/api/xyzMany",
    tag = MANY_SIDE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved records", body = Vec<ManySideWithOwnerDto>),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ManySideService::new(&state.db);

    let records = service.get_all_with_owner().await?;

    let dtos: Vec<ManySideWithOwnerDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a many-side record by id with its owner embedded.
///
/// The embedded owner omits its id.
///
/// # Returns
/// - `200 OK` - The record
/// - `404 Not Found` - No record with the given id
/// - `400 Bad Request` - Invalid id or database error
#[utoipa::path(
    get,
    path = "/api/xyzMany/{id}",
    tag = MANY_SIDE_TAG,
    params(
        ("id" = i32, Path, description = "Many-side record id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved record", body = ManySideDetailDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto)
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = ManySideService::new(&state.db);

    let record = service.get_by_id(id).await?;

    Ok(Json(record.into_detail_dto()))
}

/// Search records by keyword.
///
/// Matches the owner's name or the record's description as a case-insensitive
/// substring. Rows omit `_id` and `prepTime` and carry the owner's fields
/// flattened as `ownerName` and `ownerEmail`.
#[utoipa::path(
    get,
    path = "/api/xyzMany/keyword/{keyword}",
    tag = MANY_SIDE_TAG,
    params(
        ("keyword" = String, Path, description = "Substring to look for")
    ),
    responses(
        (status = 200, description = "Matching records", body = Vec<KeywordMatchDto>),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    keyword: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(keyword) = keyword?;
    let service = ManySideService::new(&state.db);

    let records = service.search(&keyword).await?;

    let dtos: Vec<KeywordMatchDto> = records
        .into_iter()
        .map(|r| r.into_keyword_match_dto())
        .collect();

    Ok(Json(dtos))
}

/// Average prep time per owner name.
///
/// Considers owners whose name contains "alue" and records with a prep time
/// of at least 10. Returns at most three groups with an average of at least
/// 10, lowest average first.
#[utoipa::path(
    get,
    path = "/api/xyzMany-Group-By",
    tag = MANY_SIDE_TAG,
    responses(
        (status = 200, description = "Report groups", body = Vec<OwnerPrepTimeDto>),
        (status = 400, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn report(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ManySideService::new(&state.db);

    let groups = service.report().await?;

    let dtos: Vec<OwnerPrepTimeDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get one page of many-side records.
///
/// The first path segment is the offset. `sorting_field` is a field name,
/// descending when prefixed with `-`. A limit of 0 returns every record from
/// the offset on. The size of the whole set is returned in `x-total-count`.
///
/// # Returns
/// - `200 OK` - The page, with the total count header
/// - `400 Bad Request` - Invalid offset, limit or sorting field
#[utoipa::path(
    get,
    path = "/api/xyzMany/{id}/{limit}/{sorting_field}",
    tag = MANY_SIDE_TAG,
    params(
        ("id" = u64, Path, description = "Number of records to skip"),
        ("limit" = u64, Path, description = "Page size, 0 for no limit"),
        ("sorting_field" = String, Path, description = "Field to sort by, `-` prefix for descending")
    ),
    responses(
        (status = 200, description = "Successfully retrieved page", body = Vec<ManySideDto>,
            headers(("x-total-count" = u64, description = "Number of matching records"))),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto)
    ),
)]
pub async fn get_paginated(
    State(state): State<AppState>,
    params: Result<Path<(u64, u64, String)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((offset, limit, sorting_field)) = params?;

    paginate(&state, offset, limit, &sorting_field, None).await
}

/// Get one page of many-side records whose name or description contains `filter`.
///
/// Same as the unfiltered listing; the total count covers only matching records.
#[utoipa::path(
    get,
    path = "/api/xyzMany/{id}/{limit}/{sorting_field}/{filter}",
    tag = MANY_SIDE_TAG,
    params(
        ("id" = u64, Path, description = "Number of records to skip"),
        ("limit" = u64, Path, description = "Page size, 0 for no limit"),
        ("sorting_field" = String, Path, description = "Field to sort by, `-` prefix for descending"),
        ("filter" = String, Path, description = "Case-insensitive substring of name or description")
    ),
    responses(
        (status = 200, description = "Successfully retrieved page", body = Vec<ManySideDto>,
            headers(("x-total-count" = u64, description = "Number of matching records"))),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto)
    ),
)]
pub async fn get_paginated_filtered(
    State(state): State<AppState>,
    params: Result<Path<(u64, u64, String, String)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((offset, limit, sorting_field, filter)) = params?;

    paginate(&state, offset, limit, &sorting_field, Some(filter)).await
}

async fn paginate(
    state: &AppState,
    offset: u64,
    limit: u64,
    sorting_field: &str,
    filter: Option<String>,
) -> Result<impl IntoResponse, AppError> {
    let sort = ManySideSort::parse(sorting_field)?;
    let service = ManySideService::new(&state.db);

    let page = service
        .get_paginated(ManySidePageQuery::new(offset, limit, sort, filter))
        .await?;

    let dtos: Vec<ManySideDto> = page.records.into_iter().map(|r| r.into_dto()).collect();

    Ok(([(TOTAL_COUNT_HEADER, page.total.to_string())], Json(dtos)))
}

/// Create a many-side record.
///
/// # Returns
/// - `200 OK` - The stored record with its assigned id
/// - `400 Bad Request` - A schema rule failed, `FK_neve` names no owner, the
///   name is taken, or the body is malformed
#[utoipa::path(
    post,
    path = "/api/xyzMany",
    tag = MANY_SIDE_TAG,
    request_body = ManySideInputDto,
    responses(
        (status = 200, description = "Successfully created record", body = ManySideDto),
        (status = 400, description = "Invalid record data", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ManySideInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ManySideService::new(&state.db);

    let record = service.create(payload).await?;

    Ok(Json(record.into_dto()))
}

/// Update the supplied fields of a many-side record.
///
/// Only supplied fields are validated and written.
///
/// # Returns
/// - `200 OK` - The updated record with its owner embedded
/// - `404 Not Found` - No record with the given id
/// - `400 Bad Request` - A supplied field breaks a schema rule
#[utoipa::path(
    patch,
    path = "/api/xyzMany/{id}",
    tag = MANY_SIDE_TAG,
    params(
        ("id" = i32, Path, description = "Many-side record id")
    ),
    request_body = ManySideInputDto,
    responses(
        (status = 200, description = "Successfully updated record", body = ManySideDetailDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ManySideInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let service = ManySideService::new(&state.db);

    let record = service.update(id, payload).await?;

    Ok(Json(record.into_detail_dto()))
}

/// Replace a many-side record.
///
/// The body is validated as a complete record with defaults applied.
///
/// # Returns
/// - `200 OK` - The replaced record with its owner embedded
/// - `404 Not Found` - No record with the given id, or the replacement changed nothing
/// - `400 Bad Request` - The replacement breaks a schema rule
#[utoipa::path(
    put,
    path = "/api/xyzMany/{id}",
    tag = MANY_SIDE_TAG,
    params(
        ("id" = i32, Path, description = "Many-side record id")
    ),
    request_body = ManySideInputDto,
    responses(
        (status = 200, description = "Successfully replaced record", body = ManySideDetailDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 404, description = "Record not found or not modified", body = ErrorDto)
    ),
)]
pub async fn replace(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ManySideInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let service = ManySideService::new(&state.db);

    let record = service.replace(id, payload).await?;

    Ok(Json(record.into_detail_dto()))
}

/// Delete a many-side record.
#[utoipa::path(
    delete,
    path = "/api/xyzMany/{id}",
    tag = MANY_SIDE_TAG,
    params(
        ("id" = i32, Path, description = "Many-side record id")
    ),
    responses(
        (status = 200, description = "Successfully deleted record"),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = ManySideService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::OK)
}
