//! REST API server for boards, lists and cards.

mod error;
pub mod handlers;
pub mod routes;
mod state;
pub mod validation;


use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use crate::db::Database;
use crate::paths::get_db_path;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SQLite database file
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            db_path: get_db_path(),
        }
    }
}

impl Config {
    /// Defaults overridden by `TASKBOARD_HOST`, `TASKBOARD_PORT` and
    /// `TASKBOARD_DB`. Unparseable values are ignored.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Some(host) = env::var("TASKBOARD_HOST")
            .ok()
            .and_then(|h| h.parse().ok())
        {
            config.host = host;
        }
        if let Some(port) = env::var("TASKBOARD_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        if let Ok(db) = env::var("TASKBOARD_DB")
            && !db.is_empty()
        {
            config.db_path = PathBuf::from(db);
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = db_path;
        self
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and database.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(AppState::new(db))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
