// rest/routes/tasks.rs — Task CRUD routes.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::store::Task;
use crate::AppContext;

/// GET /tasks — all tasks in creation order. Always 200.
pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.list().await)
}

/// POST /tasks request body.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Missing content decodes to the empty string. Structural decoding
    /// only, no validation.
    #[serde(default)]
    pub content: String,
    /// Accepted for shape compatibility and ignored: the store always
    /// creates tasks un-completed.
    #[serde(default)]
    pub completed: bool,
}

/// POST /tasks — create a task. 201 with the created record, or
/// 400 "Invalid task data" if the body does not decode.
///
/// The body is decoded from the raw bytes: a JSON body is accepted with
/// or without a Content-Type header.
pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let CreateTaskRequest {
        content,
        completed: _,
    } = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidTaskData)?;

    let task = ctx.store.create(content).await;
    Ok((StatusCode::CREATED, Json(task)))
}

/// DELETE /tasks/{id} — 204 empty on success, 404 if the id is unknown.
pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_task_id(&id)?;
    if ctx.store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskNotFound)
    }
}

/// PATCH /tasks/{id} — mark completed. 200 with the updated record, or
/// 404 if the id is unknown.
pub async fn complete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&id)?;
    ctx.store
        .complete(id)
        .await
        .map(Json)
        .ok_or(ApiError::TaskNotFound)
}

/// The id segment must be a plain base-10 integer: trailing garbage
/// (`/tasks/12abc`) is rejected.
fn parse_task_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| ApiError::InvalidTaskId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_rejects_trailing_garbage() {
        assert_eq!(parse_task_id("12"), Ok(12));
        assert_eq!(parse_task_id("12abc"), Err(ApiError::InvalidTaskId));
        assert_eq!(parse_task_id("abc"), Err(ApiError::InvalidTaskId));
        assert_eq!(parse_task_id(""), Err(ApiError::InvalidTaskId));
        assert_eq!(parse_task_id("-1"), Err(ApiError::InvalidTaskId));
        assert_eq!(parse_task_id(" 1"), Err(ApiError::InvalidTaskId));
    }
}
