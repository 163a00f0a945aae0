//! Script handlers for Web API.
//!
//! Request bodies and query strings are parsed and checked before a session
//! is acquired, so rejected requests never reach the store. The session is
//! returned to the pool when the handler returns, on every path.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::web::dto::{
    CreateScriptRequest, DeleteResponse, ListScriptsQuery, ScriptResponse, UpdateScriptRequest,
    ValidatedQuery,
};
use crate::web::error::{ApiError, ErrorBody};
use crate::web::handlers::AppState;

const SCRIPT_NOT_FOUND: &str = "Script not found";

/// Path extractor whose rejection renders as [`ApiError`].
type ScriptId = WithRejection<Path<i64>, ApiError>;

/// JSON body extractor whose rejection renders as [`ApiError`].
type JsonBody<T> = WithRejection<Json<T>, ApiError>;

/// List scripts.
///
/// Ordered by ascending ID. `limit` is capped at the configured maximum.
#[utoipa::path(
    get,
    path = "/scripts",
    tag = "Scripts",
    params(ListScriptsQuery),
    responses(
        (status = 200, description = "A page of scripts", body = [ScriptResponse]),
        (status = 422, description = "Invalid query parameters", body = ErrorBody)
    )
)]
pub async fn list_scripts(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListScriptsQuery>,
) -> Result<Json<Vec<ScriptResponse>>, ApiError> {
    let page = query.to_pagination(state.max_page_size);

    let mut session = state.db.acquire().await?;
    let scripts = state.scripts.list(&mut session, page).await?;

    Ok(Json(scripts.into_iter().map(ScriptResponse::from).collect()))
}

/// Create a script.
#[utoipa::path(
    post,
    path = "/scripts",
    tag = "Scripts",
    request_body = CreateScriptRequest,
    responses(
        (status = 201, description = "Script created", body = ScriptResponse),
        (status = 422, description = "Missing content or wrong field type", body = ErrorBody)
    )
)]
pub async fn create_script(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(req), _): JsonBody<CreateScriptRequest>,
) -> Result<(StatusCode, Json<ScriptResponse>), ApiError> {
    let new_script = req.into_new_script();

    let mut session = state.db.acquire().await?;
    let script = state.scripts.create(&mut session, new_script).await?;

    Ok((StatusCode::CREATED, Json(script.into())))
}

/// Get a script by ID.
#[utoipa::path(
    get,
    path = "/scripts/{id}",
    tag = "Scripts",
    params(("id" = i64, Path, description = "Script ID")),
    responses(
        (status = 200, description = "Script", body = ScriptResponse),
        (status = 404, description = "Script not found", body = ErrorBody),
        (status = 422, description = "ID is not an integer", body = ErrorBody)
    )
)]
pub async fn get_script(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): ScriptId,
) -> Result<Json<ScriptResponse>, ApiError> {
    let mut session = state.db.acquire().await?;
    let script = state
        .scripts
        .get(&mut session, id)
        .await?
        .ok_or_else(|| ApiError::not_found(SCRIPT_NOT_FOUND))?;

    Ok(Json(script.into()))
}

/// Partially update a script.
///
/// Only fields present in the body are changed. Served for both PUT and
/// PATCH.
#[utoipa::path(
    put,
    path = "/scripts/{id}",
    tag = "Scripts",
    params(("id" = i64, Path, description = "Script ID")),
    request_body = UpdateScriptRequest,
    responses(
        (status = 200, description = "Updated script", body = ScriptResponse),
        (status = 404, description = "Script not found", body = ErrorBody),
        (status = 422, description = "Invalid request", body = ErrorBody)
    )
)]
pub async fn update_script(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): ScriptId,
    WithRejection(Json(req), _): JsonBody<UpdateScriptRequest>,
) -> Result<Json<ScriptResponse>, ApiError> {
    let mut session = state.db.acquire().await?;
    let script = state
        .scripts
        .update(&mut session, id, req.into())
        .await?
        .ok_or_else(|| ApiError::not_found(SCRIPT_NOT_FOUND))?;

    Ok(Json(script.into()))
}

/// Delete a script.
#[utoipa::path(
    delete,
    path = "/scripts/{id}",
    tag = "Scripts",
    params(("id" = i64, Path, description = "Script ID")),
    responses(
        (status = 200, description = "Script deleted", body = DeleteResponse),
        (status = 404, description = "Script not found", body = ErrorBody),
        (status = 422, description = "ID is not an integer", body = ErrorBody)
    )
)]
pub async fn delete_script(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): ScriptId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut session = state.db.acquire().await?;
    if !state.scripts.delete(&mut session, id).await? {
        return Err(ApiError::not_found(SCRIPT_NOT_FOUND));
    }

    Ok(Json(DeleteResponse::ok()))
}
