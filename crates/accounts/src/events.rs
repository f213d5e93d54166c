//! Notifications pushed to presentation collaborators.

use tokio::sync::broadcast;

use crate::list::AccountList;

/// Default number of undelivered events a slow subscriber may lag behind.
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Registry notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    /// Redacted, display-ordered accounts after a load or a mutation.
    Loaded(AccountList),
}

/// Broadcast channel for [`AccountEvent`]s.
#[derive(Debug, Clone)]
pub struct AccountEvents {
    sender: broadcast::Sender<AccountEvent>,
}

impl AccountEvents {
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, event: AccountEvent) {
        if self.sender.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for account events");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AccountEvent> {
        self.sender.subscribe()
    }
}

impl Default for AccountEvents {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}
