//! Card management handlers, including cross-list moves.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::validation::{
    Validate, ValidJson, check_due_date, check_entity_id, check_optional_title, check_position,
    check_title,
};
use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{Card, CardMove, CardRepository, Database, NewCard};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f8")]
    pub id: String,
    pub list_id: String,
    pub board_id: String,
    #[schema(example = "Draft release notes")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "2025-06-01T09:00:00Z")]
    pub due_date: Option<String>,
    pub labels: Vec<String>,
    #[schema(example = 0)]
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Card> for CardResponse {
    fn from(c: Card) -> Self {
        Self {
            id: c.id,
            list_id: c.list_id,
            board_id: c.board_id,
            title: c.title,
            description: c.description,
            due_date: c.due_date,
            labels: c.labels,
            position: c.position,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    #[schema(example = "Draft release notes")]
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 datetime
    pub due_date: Option<String>,
    pub labels: Option<Vec<String>>,
    /// Explicit position; omitted means after the list's last card
    pub position: Option<i64>,
}

impl Validate for CreateCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_title(&self.title)?;
        check_due_date(self.due_date.as_deref())?;
        check_position(self.position)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub labels: Option<Vec<String>>,
    pub position: Option<i64>,
}

impl Validate for UpdateCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_optional_title(self.title.as_deref())?;
        check_due_date(self.due_date.as_deref())?;
        check_position(self.position)
    }
}

impl UpdateCardRequest {
    fn merge_into(self, target: &mut Card) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
        if let Some(due_date) = self.due_date {
            target.due_date = Some(due_date);
        }
        if let Some(labels) = self.labels {
            target.labels = labels;
        }
        if let Some(position) = self.position {
            target.position = position;
        }
    }
}

/// Move request. `boardId` is stored as given, not checked against the
/// target list.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub list_id: String,
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub board_id: String,
    pub position: Option<i64>,
}

impl Validate for MoveCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        check_entity_id("listId", &self.list_id)?;
        check_entity_id("boardId", &self.board_id)?;
        check_position(self.position)
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/lists/{id}/cards",
    tag = "cards",
    params(("id" = String, Path, description = "List ID")),
    responses(
        (status = 200, description = "Cards of the list, ascending by position", body = Vec<CardResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_cards<D: Database>(
    State(state): State<AppState<D>>,
    Path(list_id): Path<String>,
) -> Result<Json<Vec<CardResponse>>, ApiError> {
    let cards = state.db().cards().list_by_list(&list_id).await?;
    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/lists/{id}/cards",
    tag = "cards",
    params(("id" = String, Path, description = "List ID")),
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card created", body = CardResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(list_id): Path<String>,
    ValidJson(req): ValidJson<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardResponse>), ApiError> {
    let card = NewCard {
        list_id,
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        labels: req.labels.unwrap_or_default(),
        position: req.position,
    };

    let created = state.db().cards().create(&card).await?;

    Ok((StatusCode::CREATED, Json(CardResponse::from(created))))
}

#[utoipa::path(
    put,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "Card updated", body = CardResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Card not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    let cards = state.db().cards();
    let mut card = cards.get(&id).await?;

    req.merge_into(&mut card);

    let updated = cards.update(&card).await?;
    Ok(Json(CardResponse::from(updated)))
}

#[utoipa::path(
    put,
    path = "/cards/{id}/move",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    request_body = MoveCardRequest,
    responses(
        (status = 200, description = "Card moved", body = CardResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Card or target list not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn move_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<MoveCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    let target = CardMove {
        list_id: req.list_id,
        board_id: req.board_id,
        position: req.position,
    };

    let moved = state.db().cards().move_card(&id, &target).await?;
    Ok(Json(CardResponse::from(moved)))
}

#[utoipa::path(
    delete,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 404, description = "Card not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db().cards().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
