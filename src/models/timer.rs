use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc::UnboundedSender, Notify};

/// Handle to a spawned timer task. Cancelled by `cancel` or on drop, so a
/// timer never outlives whatever owns it.
#[derive(Debug)]
pub struct Timer {
    cancel_token: Arc<Notify>,
}

impl Timer {
    /// Sends `event` once after `delay`.
    pub fn once<E>(delay: Duration, events: UnboundedSender<E>, event: E) -> Self
    where
        E: Send + 'static,
    {
        let cancel_token = Arc::new(Notify::new());
        let cancelled = Arc::clone(&cancel_token);

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    if events.send(event).is_err() {
                        debug!("Timer fired after its receiver was dropped");
                    }
                },
                _ = cancelled.notified() => {
                    debug!("Timer cancelled");
                }
            }
        });

        Self { cancel_token }
    }

    /// Ticks once a second for `seconds` seconds, sending `on_tick(remaining)`
    /// after each tick. The last event carries `remaining == 0`.
    pub fn countdown<E, F>(seconds: u32, events: UnboundedSender<E>, on_tick: F) -> Self
    where
        E: Send + 'static,
        F: Fn(u32) -> E + Send + 'static,
    {
        let cancel_token = Arc::new(Notify::new());
        let cancelled = Arc::clone(&cancel_token);

        tokio::spawn(async move {
            let mut remaining = seconds;

            while remaining > 0 {
                tokio::select! {
                    _ = tokio::time::sleep(Duration::from_secs(1)) => {
                        remaining -= 1;

                        if events.send(on_tick(remaining)).is_err() {
                            debug!("Countdown receiver dropped");
                            break;
                        }
                    },
                    _ = cancelled.notified() => {
                        debug!("Countdown cancelled with {} seconds left", remaining);
                        break;
                    }
                }
            }
        });

        Self { cancel_token }
    }

    pub fn cancel(&self) {
        self.cancel_token.notify_one();
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}
