use axum::{
    extract::{ws::WebSocketUpgrade, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_sessions::Session;
use uuid::Uuid;

use crate::errors::HandlerError;
use crate::handlers::WebSockets;
use crate::models::{Game, PlayerId, PlayerList};
use crate::render::Render;

pub type AppState = Arc<Mutex<PlayerList>>;

const SESSION_ID: &str = "id";

pub struct Handle {}

impl Handle {
    pub async fn root(session: Session) -> Result<impl IntoResponse, HandlerError> {
        Self::player_id(&session).await?;
        Ok(Html(Render::root()))
    }

    pub async fn start(
        session: Session,
        State(players): State<AppState>,
    ) -> Result<impl IntoResponse, HandlerError> {
        Self::with_game(&session, &players, |game| game.start()).await
    }

    pub async fn next_level(
        session: Session,
        State(players): State<AppState>,
    ) -> Result<impl IntoResponse, HandlerError> {
        Self::with_game(&session, &players, |game| {
            game.next_level();
        })
        .await
    }

    pub async fn reset(
        session: Session,
        State(players): State<AppState>,
    ) -> Result<impl IntoResponse, HandlerError> {
        Self::with_game(&session, &players, |game| game.reset()).await
    }

    pub async fn hint(
        session: Session,
        State(players): State<AppState>,
    ) -> Result<impl IntoResponse, HandlerError> {
        Self::with_game(&session, &players, |game| {
            game.request_hint();
        })
        .await
    }

    pub async fn cancel_ad(
        session: Session,
        State(players): State<AppState>,
    ) -> Result<impl IntoResponse, HandlerError> {
        Self::with_game(&session, &players, |game| game.cancel_ad()).await
    }

    pub async fn websocket(
        ws: WebSocketUpgrade,
        State(players): State<AppState>,
        session: Session,
    ) -> Result<impl IntoResponse, HandlerError> {
        let player_id = Self::player_id(&session).await?;
        Ok(ws.on_upgrade(|socket| async move { WebSockets::new(socket, players, player_id).await }))
    }

    // The session's player id, minted on first visit.
    async fn player_id(session: &Session) -> Result<PlayerId, HandlerError> {
        if let Some(id) = session.get::<PlayerId>(SESSION_ID).await? {
            return Ok(id);
        }
        let id = PlayerId(Uuid::new_v4().to_string());
        session.insert(SESSION_ID, &id).await?;
        info!("New session {}", id);
        Ok(id)
    }

    async fn with_game<F>(
        session: &Session,
        players: &AppState,
        action: F,
    ) -> Result<StatusCode, HandlerError>
    where
        F: FnOnce(&mut Game),
    {
        let player_id = Self::player_id(session).await?;
        Self::with_player_game(players, &player_id, action).await
    }

    // Applies `action` to the game behind the player's open websocket.
    async fn with_player_game<F>(
        players: &AppState,
        player_id: &PlayerId,
        action: F,
    ) -> Result<StatusCode, HandlerError>
    where
        F: FnOnce(&mut Game),
    {
        let game = players
            .lock()
            .await
            .game(player_id)
            .ok_or_else(|| HandlerError::NoGame(player_id.to_string()))?;
        let mut game = game.lock().await;
        action(&mut *game);
        Ok(StatusCode::NO_CONTENT)
    }
}
