mod handlers;
mod websockets;

pub use handlers::{AppState, Handle};
pub use websockets::{ClientMessage, WebSockets};
