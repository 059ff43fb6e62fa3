use super::Game;
use crate::config::GameTimings;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct Player {
    game: Arc<Mutex<Game>>,
    connections: usize,
}

/// Every session's game, keyed by session id.
#[derive(Debug)]
pub struct PlayerList {
    players: HashMap<PlayerId, Player>,
    timings: GameTimings,
}

impl PlayerList {
    pub fn new(timings: GameTimings) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            players: HashMap::new(),
            timings,
        }))
    }

    /// The game for `id`, if one of its websockets is open.
    pub fn game(&self, id: &PlayerId) -> Option<Arc<Mutex<Game>>> {
        self.players.get(id).map(|player| Arc::clone(&player.game))
    }

    /// Registers a websocket for `id` and returns its game, creating it on
    /// the first connection.
    pub fn connect(&mut self, id: &PlayerId) -> Arc<Mutex<Game>> {
        let timings = self.timings;
        let player = self.players.entry(id.clone()).or_insert_with(|| {
            info!("New player {}", id);
            Player {
                game: Game::new(timings),
                connections: 0,
            }
        });
        player.connections += 1;
        Arc::clone(&player.game)
    }

    /// Drops a websocket for `id`; the game goes with the last one.
    pub fn disconnect(&mut self, id: &PlayerId) {
        let Some(player) = self.players.get_mut(id) else {
            return;
        };
        player.connections = player.connections.saturating_sub(1);
        if player.connections == 0 {
            self.players.remove(id);
            info!("Player {} left, {} games active", id, self.players.len());
        }
    }
}
