use super::{Level, Timer};
use crate::config::{GameTimings, LEVELS};
use crate::render::Render;
use crate::selection::MatchResult;
use log::{debug, info};
use std::sync::{Arc, Weak};
use tokio::sync::{broadcast, mpsc, Mutex};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStage {
    Start,
    /// Index into `LEVELS`.
    Playing(usize),
}

/// Timed effects delivered back to the game. Each carries the generation of
/// the level that scheduled it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameEvent {
    AdTick { generation: u64, remaining: u32 },
    HintExpired { generation: u64 },
    NotificationExpired { generation: u64 },
}

// Timers scheduled by the current level; dropping them cancels them.
#[derive(Debug, Default)]
struct LevelTimers {
    ad: Option<Timer>,
    hint: Option<Timer>,
    notification: Option<Timer>,
}

/// One player's run through the levels.
#[derive(Debug)]
pub struct Game {
    stage: GameStage,
    level: Option<Level>,
    generation: u64,
    timings: GameTimings,
    timers: LevelTimers,
    pub tx: broadcast::Sender<String>,
    events_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Game {
    pub fn new(timings: GameTimings) -> Arc<Mutex<Self>> {
        let (tx, _) = broadcast::channel(16);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let game = Arc::new(Mutex::new(Self {
            stage: GameStage::Start,
            level: None,
            generation: 0,
            timings,
            timers: LevelTimers::default(),
            tx,
            events_tx,
        }));

        tokio::spawn(Game::run_event_loop(Arc::downgrade(&game), events_rx));

        game
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    /// Leaves the start screen for level 1.
    pub fn start(&mut self) {
        if self.stage == GameStage::Start {
            self.load_level(0);
        }
    }

    /// Moves on once the current level is complete. After the last level the
    /// game returns to the start screen.
    pub fn next_level(&mut self) -> bool {
        let GameStage::Playing(index) = self.stage else {
            return false;
        };
        if !self.level.as_ref().is_some_and(Level::is_complete) {
            return false;
        }

        if index + 1 < LEVELS.len() {
            self.load_level(index + 1);
        } else {
            info!("All levels complete, back to the start");
            self.reset();
        }
        true
    }

    pub fn reset(&mut self) {
        self.timers = LevelTimers::default();
        self.level = None;
        self.stage = GameStage::Start;
        self.broadcast_view();
    }

    fn load_level(&mut self, index: usize) {
        // Old timers go first so nothing stale fires into the new level
        self.timers = LevelTimers::default();
        self.generation += 1;
        let config = &LEVELS[index];
        info!("Starting level {} ({})", config.number, config.theme);

        self.level = Some(Level::new(config, self.generation));
        self.stage = GameStage::Playing(index);
        self.broadcast_view();
    }

    pub fn begin(&mut self, row: usize, col: usize) -> bool {
        let Some(level) = self.level.as_mut() else {
            return false;
        };
        let started = level.begin(row, col);
        if started {
            self.broadcast_view();
        }
        started
    }

    pub fn extend(&mut self, row: usize, col: usize) -> bool {
        let Some(level) = self.level.as_mut() else {
            return false;
        };
        let changed = level.extend(row, col);
        if changed {
            self.broadcast_view();
        }
        changed
    }

    pub fn end(&mut self) -> MatchResult {
        let Some(level) = self.level.as_mut() else {
            return MatchResult::NoMatch;
        };
        let result = level.end();

        if let MatchResult::Found { .. } = result {
            let generation = level.generation();
            if level.is_complete() {
                info!("Level {} complete", level.config().number);
            }
            self.timers.notification = Some(Timer::once(
                self.timings.notification,
                self.events_tx.clone(),
                GameEvent::NotificationExpired { generation },
            ));
        }
        self.broadcast_view();
        result
    }

    /// Asks for a hint. Levels with an ad run the countdown first. Refused
    /// while the level is complete or a hint or ad is already running.
    pub fn request_hint(&mut self) -> bool {
        let Some(level) = self.level.as_mut() else {
            return false;
        };
        if level.is_complete() || level.hint_active() || level.ad_remaining().is_some() {
            return false;
        }

        if level.config().ad_before_hint && self.timings.ad_seconds > 0 {
            let generation = level.generation();
            level.set_ad_remaining(Some(self.timings.ad_seconds));
            self.timers.ad = Some(Timer::countdown(
                self.timings.ad_seconds,
                self.events_tx.clone(),
                move |remaining| GameEvent::AdTick {
                    generation,
                    remaining,
                },
            ));
            self.broadcast_view();
            true
        } else {
            self.activate_hint()
        }
    }

    pub fn cancel_ad(&mut self) {
        let Some(level) = self.level.as_mut() else {
            return;
        };
        if level.ad_remaining().is_some() {
            level.set_ad_remaining(None);
            self.timers.ad = None;
            self.broadcast_view();
        }
    }

    fn activate_hint(&mut self) -> bool {
        let Some(level) = self.level.as_mut() else {
            return false;
        };
        if level.hint_active() || !level.show_hint(&mut rand::thread_rng()) {
            return false;
        }

        self.timers.hint = Some(Timer::once(
            self.timings.hint,
            self.events_tx.clone(),
            GameEvent::HintExpired {
                generation: level.generation(),
            },
        ));
        self.broadcast_view();
        true
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        let generation = match event {
            GameEvent::AdTick { generation, .. }
            | GameEvent::HintExpired { generation }
            | GameEvent::NotificationExpired { generation } => generation,
        };
        let Some(level) = self.level.as_mut().filter(|l| l.generation() == generation) else {
            debug!("Dropping stale {:?}", event);
            return;
        };

        match event {
            GameEvent::AdTick { remaining: 0, .. } => {
                level.set_ad_remaining(None);
                self.timers.ad = None;
                if !self.activate_hint() {
                    self.broadcast_view();
                }
            }
            GameEvent::AdTick { remaining, .. } => {
                level.set_ad_remaining(Some(remaining));
                self.broadcast_view();
            }
            GameEvent::HintExpired { .. } => {
                level.clear_hint();
                self.timers.hint = None;
                self.broadcast_view();
            }
            GameEvent::NotificationExpired { .. } => {
                level.clear_notification();
                self.timers.notification = None;
                self.broadcast_view();
            }
        }
    }

    async fn run_event_loop(game: Weak<Mutex<Self>>, mut events: mpsc::UnboundedReceiver<GameEvent>) {
        while let Some(event) = events.recv().await {
            let Some(game) = game.upgrade() else {
                break;
            };
            game.lock().await.handle_event(event);
        }
    }

    pub fn view(&self) -> String {
        Render::game(self)
    }

    fn broadcast_view(&self) {
        if let Err(e) = self.tx.send(self.view()) {
            debug!("No one is watching this game: {}", e);
        }
    }
}
