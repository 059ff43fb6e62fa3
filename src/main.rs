use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::services::ServeDir;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use word_search::config::Config;
use word_search::errors::ServerError;
use word_search::handlers::Handle;
use word_search::logger::init_logger;
use word_search::models::PlayerList;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logger(config.debug);

    let players = PlayerList::new(config.timings);
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    let app = Router::new()
        .route("/", get(Handle::root))
        .route("/start", post(Handle::start))
        .route("/next", post(Handle::next_level))
        .route("/reset", post(Handle::reset))
        .route("/hint", post(Handle::hint))
        .route("/cancel_ad", post(Handle::cancel_ad))
        .route("/ws", get(Handle::websocket))
        // Serve static files from the configured directory
        .nest_service("/static", ServeDir::new(&config.static_path))
        .layer(session_layer)
        .layer(ConcurrencyLimitLayer::new(config.max_connections))
        .with_state(players);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
