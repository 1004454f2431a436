use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::errors::ModelError;
use models::todo::{validate_title, NewTodo, Todo, TodoPatch};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Substring to match against titles, case-insensitive.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub items: Vec<Todo>,
}

/// HTTP creation shape. `title` stays optional here so its absence maps to
/// the structured error list instead of a deserialization rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoInput {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation("id", "id must be a valid UUID"))
}

fn check_title(title: &str) -> Result<(), ApiError> {
    validate_title(title).map_err(|ModelError::Validation(msg)| ApiError::validation("title", msg))
}

#[utoipa::path(
    get, path = "/api/todos", tag = "todos",
    params(ListQuery),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let q = query.q.unwrap_or_default();
    let items = state.todos.list(&q).await;
    info!(count = items.len(), filtered = !q.trim().is_empty(), "list todos");
    Json(ListResponse { total: items.len(), items })
}

#[utoipa::path(
    post, path = "/api/todos", tag = "todos",
    request_body = crate::openapi::CreateTodoInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateTodoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::validation("body", e.body_text()))?;
    let title = input
        .title
        .ok_or_else(|| ApiError::validation("title", "title is required"))?;
    check_title(&title)?;

    let created = state
        .todos
        .create(NewTodo { title, completed: input.completed.unwrap_or(false) })
        .await?;
    info!(id = %created.id, "created todo");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    match state.todos.get(id).await {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    put, path = "/api/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    request_body = crate::openapi::UpdateTodoInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoInput>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload.map_err(|e| ApiError::validation("body", e.body_text()))?;
    if let Some(title) = &input.title {
        check_title(title)?;
    }

    let updated = state
        .todos
        .update(id, TodoPatch { title: input.title, completed: input.completed })
        .await?;
    info!(id = %updated.id, "updated todo");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;
    if state.todos.remove(id).await? {
        info!(%id, "deleted todo");
        Ok(Json(DeleteResponse { message: "deleted" }))
    } else {
        Err(ApiError::NotFound)
    }
}
