use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{Level, info};

use submission_server::config::AppConfig;
use submission_server::state::AppState;
use submission_server::store::{FileStorage, SubmissionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let storage = FileStorage::new(config.storage.path.clone());
    storage.ensure_exists().await?;
    info!("Using submissions file at {}", config.storage.path.display());

    let state = AppState {
        store: Arc::new(SubmissionStore::new(Box::new(storage))),
        config: config.clone(),
    };

    let app = submission_server::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
