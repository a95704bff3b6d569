//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, BoardResponse, CardResponse, CreateBoardRequest, CreateCardRequest, CreateListRequest,
    HealthResponse, ListResponse, MoveCardRequest, UpdateBoardRequest, UpdateCardRequest,
    UpdateListRequest,
};
use super::state::AppState;
use super::ErrorResponse;
use crate::db::Database;

/// Build routes with generic database type.
///
/// Applies the `::<D>` turbofish to every handler. Keep all methods of one
/// path inside the same invocation.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "Boards, lists and cards with position ordering",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_boards,
        handlers::get_board,
        handlers::create_board,
        handlers::update_board,
        handlers::delete_board,
        handlers::list_lists,
        handlers::create_list,
        handlers::update_list,
        handlers::delete_list,
        handlers::list_cards,
        handlers::create_card,
        handlers::update_card,
        handlers::move_card,
        handlers::delete_card,
    ),
    components(
        schemas(
            HealthResponse,
            BoardResponse,
            CreateBoardRequest,
            UpdateBoardRequest,
            ListResponse,
            CreateListRequest,
            UpdateListRequest,
            CardResponse,
            CreateCardRequest,
            UpdateCardRequest,
            MoveCardRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "boards", description = "Board management endpoints"),
        (name = "lists", description = "List management endpoints"),
        (name = "cards", description = "Card management and move endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::openapi_json));

    // Boards, plus the board-scoped list collection
    let board_routes = routes!(D => {
        get "/boards" => handlers::list_boards,
        post "/boards" => handlers::create_board,
        get "/boards/{id}" => handlers::get_board,
        put "/boards/{id}" => handlers::update_board,
        delete "/boards/{id}" => handlers::delete_board,
        get "/boards/{id}/lists" => handlers::list_lists,
        post "/boards/{id}/lists" => handlers::create_list,
    });

    // Lists, plus the list-scoped card collection
    let list_routes = routes!(D => {
        put "/lists/{id}" => handlers::update_list,
        delete "/lists/{id}" => handlers::delete_list,
        get "/lists/{id}/cards" => handlers::list_cards,
        post "/lists/{id}/cards" => handlers::create_card,
    });

    let card_routes = routes!(D => {
        put "/cards/{id}" => handlers::update_card,
        delete "/cards/{id}" => handlers::delete_card,
        put "/cards/{id}/move" => handlers::move_card,
    });

    system_routes
        .merge(board_routes)
        .merge(list_routes)
        .merge(card_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
