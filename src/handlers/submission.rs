use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::shared::{SuccessBody, parse_index};
use crate::models::submission::*;
use crate::state::AppState;
use crate::store::StoreError;

#[utoipa::path(
    post,
    path = "/submit",
    tag = "Submissions",
    operation_id = "createSubmission",
    summary = "Append a new submission",
    description = "Appends a submission at the end of the collection and rewrites the store file. The new record is addressed by the collection's new highest index.",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission created", body = SuccessBody),
        (status = 400, description = "A required field is missing or empty", body = ErrorBody),
        (status = 500, description = "Storage read or write failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_submission(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let submission = payload.into_submission()?;

    let index = state.store.create(submission).await?;
    debug!(index, "submission appended");

    Ok((StatusCode::CREATED, Json(SuccessBody::ok())))
}

#[utoipa::path(
    get,
    path = "/read",
    tag = "Submissions",
    operation_id = "readSubmission",
    summary = "Fetch a submission by index",
    params(ReadQuery),
    responses(
        (status = 200, description = "The submission at the given index", body = Submission),
        (status = 400, description = "Index is absent, non-numeric, or negative", body = ErrorBody),
        (status = 404, description = "Index is past the end of the collection", body = ErrorBody),
        (status = 500, description = "Storage read failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn read_submission(
    State(state): State<AppState>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<Submission>, AppError> {
    let index = parse_index(query.index.as_deref())?;

    let submission = state.store.read(index).await?;

    Ok(Json(submission))
}

#[utoipa::path(
    post,
    path = "/edit",
    tag = "Submissions",
    operation_id = "editSubmission",
    summary = "Replace the submission at an index",
    description = "Replaces the whole record at the given index; there is no partial-field merge. Unlike read and delete, an out-of-range index is a 400 here.",
    request_body = EditSubmissionRequest,
    responses(
        (status = 200, description = "Submission replaced", body = SuccessBody),
        (status = 400, description = "Missing field, or invalid/out-of-range index", body = ErrorBody),
        (status = 500, description = "Storage read, parse, or write failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn edit_submission(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EditSubmissionRequest>,
) -> Result<Json<SuccessBody>, AppError> {
    let (index, submission) = payload.into_parts()?;

    state
        .store
        .edit(index, submission)
        .await
        .map_err(|e| match e {
            StoreError::OutOfRange { .. } => AppError::InvalidIndex,
            other => other.into(),
        })?;
    debug!(index, "submission replaced");

    Ok(Json(SuccessBody::ok()))
}

#[utoipa::path(
    delete,
    path = "/delete/{index}",
    tag = "Submissions",
    operation_id = "deleteSubmission",
    summary = "Remove the submission at an index",
    description = "Removes the record at the given index. Later entries shift down by one position; removal is permanent.",
    params(
        ("index" = String, Path, description = "Zero-based position of the submission to remove"),
    ),
    responses(
        (status = 200, description = "Submission removed", body = SuccessBody),
        (status = 400, description = "Index is non-numeric or negative", body = ErrorBody),
        (status = 404, description = "Index is past the end of the collection", body = ErrorBody),
        (status = 500, description = "Storage read, parse, or write failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<SuccessBody>, AppError> {
    let index = parse_index(Some(index.as_str()))?;

    state.store.delete(index).await?;
    debug!(index, "submission removed");

    Ok(Json(SuccessBody::ok()))
}
