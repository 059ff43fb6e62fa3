//! Error types for the server side of the game.
//!
//! The puzzle core never fails; it degrades silently. Everything here belongs
//! to configuration, the HTTP/websocket host, and client messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures inside a request handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("no open game for player {0}")]
    NoGame(String),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::NoGame(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

/// A websocket frame the server could not act on.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("no level is being played")]
    NoLevel,
}

impl MessageError {
    pub fn code(&self) -> &'static str {
        match self {
            MessageError::Malformed(_) => "MALFORMED",
            MessageError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            MessageError::NoLevel => "NO_LEVEL",
        }
    }

    /// JSON error frame sent back to the client.
    pub fn to_frame(&self) -> String {
        serde_json::json!({
            "action": "Error",
            "code": self.code(),
            "message": self.to_string(),
        })
        .to_string()
    }
}
