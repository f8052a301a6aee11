use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shared_types::{AppConfig, Notification};
use uuid::Uuid;

use crate::store::{keys, SessionStore};

/// Read the full notification list from the store.
///
/// This is best-effort local bookkeeping, never authoritative: a missing or
/// corrupt payload degrades to the empty list rather than erroring.
pub fn all<S: SessionStore>(store: &S) -> Vec<Notification> {
    store
        .get(keys::NOTIFICATIONS)
        .map(|raw| serde_json::from_str(&raw).unwrap_or_default())
        .unwrap_or_default()
}

fn save<S: SessionStore>(store: &mut S, items: &[Notification]) {
    match serde_json::to_string(items) {
        Ok(raw) => store.set(keys::NOTIFICATIONS, &raw),
        Err(err) => tracing::warn!(%err, "failed to encode notifications"),
    }
}

/// Append a record to the local list.
pub fn push<S: SessionStore>(store: &mut S, notification: Notification) {
    let mut items = all(store);
    items.push(notification);
    save(store, &items);
}

/// Flip one record to read. Returns whether a record with `id` existed.
/// All other records are left untouched.
pub fn mark_read<S: SessionStore>(store: &mut S, id: Uuid) -> bool {
    let mut items = all(store);
    let mut found = false;
    for item in items.iter_mut() {
        if item.id == id {
            item.read = true;
            found = true;
        }
    }
    if found {
        save(store, &items);
    }
    found
}

/// Current number of unread records.
pub fn unread_count<S: SessionStore>(store: &S) -> usize {
    all(store).iter().filter(|n| !n.read).count()
}

/// Background recompute of the unread count for the navbar badge.
///
/// The task wakes on a fixed interval, recounts against the store, and
/// publishes into a shared atomic. Dropping the poller aborts the task —
/// the interval is cleared when its owner unmounts, on every exit path.
pub struct UnreadPoller {
    count: Arc<AtomicUsize>,
    handle: tokio::task::JoinHandle<()>,
}

impl UnreadPoller {
    /// Spawn with an explicit interval. Must be called from within a tokio
    /// runtime.
    pub fn spawn<S>(store: Arc<Mutex<S>>, interval: Duration) -> Self
    where
        S: SessionStore + Send + 'static,
    {
        let count = Arc::new(AtomicUsize::new(0));
        let published = count.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let current = {
                    let guard = store.lock().unwrap();
                    unread_count(&*guard)
                };
                published.store(current, Ordering::Relaxed);
            }
        });
        Self { count, handle }
    }

    /// Spawn with the configured badge interval.
    pub fn spawn_with_config<S>(store: Arc<Mutex<S>>, config: &AppConfig) -> Self
    where
        S: SessionStore + Send + 'static,
    {
        Self::spawn(
            store,
            Duration::from_secs(config.notifications.poll_interval_secs),
        )
    }

    /// Latest published unread count.
    pub fn unread(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Drop for UnreadPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
