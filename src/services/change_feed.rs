use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{ChangeListener, ChangeSource, StoreChange, Subscription};

type Listeners = Mutex<HashMap<u64, Arc<ChangeListener>>>;

/// In-process fan-out of store changes to subscribed listeners.
#[derive(Clone, Default)]
pub struct ChangeFeed {
    listeners: Arc<Listeners>,
    next_id: Arc<AtomicU64>,
}

impl ChangeFeed {
    pub fn publish(&self, change: &StoreChange) {
        // Listeners run outside the lock so they may subscribe or unsubscribe.
        let listeners: Vec<_> = lock(&self.listeners).values().cloned().collect();
        tracing::debug!(listeners = listeners.len(), "publishing store change");
        for listener in listeners {
            listener(change);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }
}

impl ChangeSource for ChangeFeed {
    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.listeners).insert(id, Arc::new(listener));

        let listeners = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                lock(&listeners).remove(&id);
            }
        })
    }
}

fn lock(listeners: &Listeners) -> MutexGuard<'_, HashMap<u64, Arc<ChangeListener>>> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}
