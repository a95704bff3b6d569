//! List management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::validation::{
    Validate, ValidJson, check_optional_title, check_position, check_title,
};
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{Database, List, ListRepository, NewList};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub board_id: String,
    #[schema(example = "In Progress")]
    pub title: String,
    #[schema(example = 0)]
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<List> for ListResponse {
    fn from(l: List) -> Self {
        Self {
            id: l.id,
            board_id: l.board_id,
            title: l.title,
            position: l.position,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListRequest {
    #[schema(example = "In Progress")]
    pub title: String,
    /// Explicit position; omitted means after the board's last list
    pub position: Option<i64>,
}

impl Validate for CreateListRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_title(&self.title)?;
        check_position(self.position)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub position: Option<i64>,
}

impl Validate for UpdateListRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_title(self.title.as_deref())?;
        check_position(self.position)
    }
}

impl UpdateListRequest {
    fn merge_into(self, target: &mut List) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(position) = self.position {
            target.position = position;
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/boards/{id}/lists",
    tag = "lists",
    params(("id" = String, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Lists of the board, ascending by position", body = Vec<ListResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_lists<D: Database>(
    State(state): State<AppState<D>>,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<ListResponse>>, ApiError> {
    let lists = state.db().lists().list_by_board(&board_id).await?;
    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/boards/{id}/lists",
    tag = "lists",
    params(("id" = String, Path, description = "Board ID")),
    request_body = CreateListRequest,
    responses(
        (status = 201, description = "List created", body = ListResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Board not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(board_id): Path<String>,
    ValidJson(req): ValidJson<CreateListRequest>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let list = NewList {
        board_id,
        title: req.title,
        position: req.position,
    };

    let created = state.db().lists().create(&list).await?;

    Ok((StatusCode::CREATED, Json(ListResponse::from(created))))
}

#[utoipa::path(
    put,
    path = "/lists/{id}",
    tag = "lists",
    params(("id" = String, Path, description = "List ID")),
    request_body = UpdateListRequest,
    responses(
        (status = 200, description = "List updated", body = ListResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    let lists = state.db().lists();
    let mut list = lists.get(&id).await?;

    req.merge_into(&mut list);

    let updated = lists.update(&list).await?;
    Ok(Json(ListResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/lists/{id}",
    tag = "lists",
    params(("id" = String, Path, description = "List ID")),
    responses(
        (status = 204, description = "List and its cards deleted"),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db().lists().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
