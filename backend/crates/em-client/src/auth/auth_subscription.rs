use crate::AuthChange;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

const DEFAULT_CAPACITY: usize = 32;

/// Fan-out of [`AuthChange`] notifications to every subscriber.
#[derive(Debug, Clone)]
pub struct AuthChannel {
    sender: broadcast::Sender<AuthChange>,
}

impl Default for AuthChannel {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl AuthChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Returns how many subscribers received the change.
    pub fn publish(&self, change: AuthChange) -> usize {
        self.sender.send(change).unwrap_or(0)
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// What a subscriber sees next
#[derive(Debug, Clone, PartialEq)]
pub enum AuthNotification {
    Change(AuthChange),
    /// The subscriber fell behind and `skipped` changes were dropped
    Lagged { skipped: u64 },
    /// The auth service went away
    Closed,
}

/// Live subscription handle; detaches on drop.
#[derive(Debug)]
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthChange>,
}

impl AuthSubscription {
    pub async fn recv(&mut self) -> AuthNotification {
        match self.receiver.recv().await {
            Ok(change) => AuthNotification::Change(change),
            Err(RecvError::Lagged(skipped)) => AuthNotification::Lagged { skipped },
            Err(RecvError::Closed) => AuthNotification::Closed,
        }
    }

    /// Explicit form of dropping the handle.
    pub fn unsubscribe(self) {}
}
