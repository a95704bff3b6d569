//! Taskboard API server binary.
//!
//! Creates the concrete database implementation and hands it to the API
//! server, which only sees the `Database` trait.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use taskboard::api::{self, ApiError, Config};
use taskboard::db::{Database, DbError, SqliteDatabase};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(taskboard::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(taskboard::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(taskboard::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "taskboard-api")]
#[command(author, version, about = "Taskboard API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: TASKBOARD_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: TASKBOARD_PORT, default: 3000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path [env: TASKBOARD_DB, default: ~/.local/share/taskboard/taskboard.db]
    #[arg(long)]
    db: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new();
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(db) = self.db {
            config = config.with_db_path(db);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    api::init_tracing();

    let config = Cli::parse().into_config();

    info!("Opening database at {}", config.db_path.display());

    if let Some(parent) = config.db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&config.db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    api::run(config, db).await?;

    Ok(())
}
