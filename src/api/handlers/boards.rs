//! Board management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::validation::{Validate, ValidJson, check_optional_title, check_title};
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{Board, BoardRepository, Database, NewBoard};

// =============================================================================
// DTOs
// =============================================================================

/// Board response DTO
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    /// Unique identifier (24-character hex)
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Product Launch")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "2025-01-01 00:00:00")]
    pub created_at: String,
    #[schema(example = "2025-01-01 00:00:00")]
    pub updated_at: String,
}

impl From<Board> for BoardResponse {
    fn from(b: Board) -> Self {
        Self {
            id: b.id,
            title: b.title,
            description: b.description,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Create board request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBoardRequest {
    #[schema(example = "Product Launch")]
    pub title: String,
    pub description: Option<String>,
}

impl Validate for CreateBoardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_title(&self.title)
    }
}

/// Update board request DTO. Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBoardRequest {
    #[schema(example = "Product Launch v2")]
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Validate for UpdateBoardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_title(self.title.as_deref())
    }
}

impl UpdateBoardRequest {
    fn merge_into(self, target: &mut Board) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/boards",
    tag = "boards",
    responses(
        (status = 200, description = "All boards", body = Vec<BoardResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_boards<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let boards = state.db().boards().list().await?;
    Ok(Json(boards.into_iter().map(BoardResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/boards/{id}",
    tag = "boards",
    params(("id" = String, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board found", body = BoardResponse),
        (status = 404, description = "Board not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_board<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    let board = state.db().boards().get(&id).await?;
    Ok(Json(BoardResponse::from(board)))
}

#[utoipa::path(
    post,
    path = "/boards",
    tag = "boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created", body = BoardResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_board<D: Database>(
    State(state): State<AppState<D>>,
    ValidJson(req): ValidJson<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardResponse>), ApiError> {
    let board = NewBoard {
        title: req.title,
        description: req.description,
    };

    let created = state.db().boards().create(&board).await?;

    Ok((StatusCode::CREATED, Json(BoardResponse::from(created))))
}

#[utoipa::path(
    put,
    path = "/boards/{id}",
    tag = "boards",
    params(("id" = String, Path, description = "Board ID")),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Board updated", body = BoardResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Board not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_board<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateBoardRequest>,
) -> Result<Json<BoardResponse>, ApiError> {
    let boards = state.db().boards();
    let mut board = boards.get(&id).await?;

    req.merge_into(&mut board);

    let updated = boards.update(&board).await?;
    Ok(Json(BoardResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/boards/{id}",
    tag = "boards",
    params(("id" = String, Path, description = "Board ID")),
    responses(
        (status = 204, description = "Board and its lists and cards deleted"),
        (status = 404, description = "Board not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_board<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db().boards().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
