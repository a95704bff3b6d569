//! Real HTTP server for exercising the client end to end.

use tokio::net::TcpListener;

use crate::api::{AppState, routes};
use crate::cli::api_client::ApiClient;
use crate::db::{Database, SqliteDatabase};

/// Spawn the API on an ephemeral port with an in-memory database and
/// return a client pointed at it.
pub async fn spawn_test_server() -> (ApiClient, tokio::task::JoinHandle<()>) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");

    let app = routes::create_router(AppState::new(db));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = ApiClient::new(Some(format!("http://{}", addr)));
    (client, handle)
}
