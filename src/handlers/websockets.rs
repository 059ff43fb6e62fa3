use axum::extract::ws::{Message, WebSocket};
use futures::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use log::{debug, error, info, warn};
use serde::Deserialize;
use std::sync::Arc;
use tokio::{
    sync::{
        broadcast::error::RecvError,
        mpsc::{UnboundedReceiver, UnboundedSender},
        Mutex,
    },
    task::{JoinError, JoinHandle},
};

use crate::errors::MessageError;
use crate::handlers::AppState;
use crate::models::{Game, PlayerId};
use crate::selection::MatchResult;

/// Pointer events sent by the page while the player drags across the grid.
#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ClientMessage {
    Begin { row: usize, col: usize },
    Extend { row: usize, col: usize },
    End,
}

pub struct WebSockets {}

impl WebSockets {
    pub async fn new(ws: WebSocket, players: AppState, player_id: PlayerId) {
        let (sender, receiver) = ws.split();
        let (ws_sender, ws_receiver) = tokio::sync::mpsc::unbounded_channel::<Message>();

        Self::spawn_sender_task(ws_receiver, sender);

        let game = players.lock().await.connect(&player_id);
        info!("Player {} connected", player_id);

        Self::send_initial_view(&ws_sender, &game).await;
        Self::monitor_websocket_connection(receiver, ws_sender, game).await;

        players.lock().await.disconnect(&player_id);
        info!("Player {} disconnected", player_id);
    }

    fn spawn_sender_task(
        mut ws_receiver: UnboundedReceiver<Message>,
        mut sender: SplitSink<WebSocket, Message>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(msg) = ws_receiver.recv().await {
                if let Err(error) = sender.send(msg).await {
                    warn!("Failed to send message: {:?}", error);
                    break;
                }
            }
        })
    }

    async fn monitor_websocket_connection(
        receiver: SplitStream<WebSocket>,
        ws_sender: UnboundedSender<Message>,
        game: Arc<Mutex<Game>>,
    ) {
        // Pushes every new view of the game to this socket
        let mut send_task = tokio::spawn(Self::forward_views(game.clone(), ws_sender.clone()));

        // Applies the player's pointer events
        let mut recv_task = tokio::spawn(Self::receive_messages(receiver, ws_sender, game));

        let handle_task_completion =
            |task_name: &str, other_task: &mut JoinHandle<()>, result: Result<(), JoinError>| {
                if let Err(e) = result {
                    error!("{task_name} task encountered an error: {:?}", e);
                }
                other_task.abort();
            };

        tokio::select! {
            result = (&mut send_task) => handle_task_completion("Send", &mut recv_task, result),
            result = (&mut recv_task) => handle_task_completion("Receive", &mut send_task, result),
        };
    }

    async fn send_initial_view(ws_sender: &UnboundedSender<Message>, game: &Arc<Mutex<Game>>) {
        let view = game.lock().await.view();
        if let Err(e) = ws_sender.send(Message::Text(view)) {
            warn!("Failed to send initial view: {:?}", e);
        }
    }

    async fn receive_messages(
        mut receiver: SplitStream<WebSocket>,
        ws_sender: UnboundedSender<Message>,
        game: Arc<Mutex<Game>>,
    ) {
        while let Some(Ok(message)) = receiver.next().await {
            let text = match message {
                Message::Text(text) => text,
                Message::Close(_) => break,
                _ => continue,
            };

            let result = match serde_json::from_str::<ClientMessage>(&text) {
                Ok(message) => Self::apply(&mut *game.lock().await, message),
                Err(e) => Err(MessageError::from(e)),
            };

            if let Err(error) = result {
                warn!("Rejected client message {:?}: {}", text, error);
                if ws_sender.send(Message::Text(error.to_frame())).is_err() {
                    break;
                }
            }
        }
    }

    /// Feeds one pointer event into the game.
    pub fn apply(game: &mut Game, message: ClientMessage) -> Result<(), MessageError> {
        let size = game
            .level()
            .map(|level| level.grid().size())
            .ok_or(MessageError::NoLevel)?;

        match message {
            ClientMessage::Begin { row, col } => {
                if row >= size || col >= size {
                    return Err(MessageError::OutOfBounds { row, col });
                }
                game.begin(row, col);
            }
            // Targets past the edge are clipped by the selection itself
            ClientMessage::Extend { row, col } => {
                game.extend(row, col);
            }
            ClientMessage::End => {
                if let MatchResult::Found { word, .. } = game.end() {
                    debug!("Selection matched {}", word);
                }
            }
        }
        Ok(())
    }

    async fn forward_views(game: Arc<Mutex<Game>>, ws_sender: UnboundedSender<Message>) {
        let mut rx = game.lock().await.tx.subscribe();

        loop {
            match rx.recv().await {
                Ok(view) => {
                    if ws_sender.send(Message::Text(view)).is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!("Skipped {} stale views", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}
