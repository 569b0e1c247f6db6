//! # Session Events
//!
//! Broadcast signal raised by the request executor when the backend rejects
//! the session (401) or the action (403), so listeners such as a login
//! prompt can react in one place instead of at every call site.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// 401: the token was cleared before this event was sent.
    Expired { message: String },
    /// 403: the token is still valid.
    Forbidden { message: String },
}

#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn emit(&self, event: SessionEvent) {
        match self.sender.send(event) {
            Ok(listeners) => tracing::debug!(listeners, "Session event delivered"),
            Err(broadcast::error::SendError(event)) => {
                tracing::debug!(?event, "Session event dropped, no listeners");
            }
        }
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
