use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

type Callback = Arc<Mutex<dyn FnMut() + Send>>;
type Entries = Arc<Mutex<Vec<(u64, Callback)>>>;

/// Registry for dismissal callbacks (outside-click, escape, blur — whatever
/// the shell wires in as the global event source).
///
/// Subscriptions are scoped: [`subscribe`](ListenerRegistry::subscribe)
/// attaches, dropping the returned [`Subscription`] detaches, and the detach
/// runs on every exit path, so an owner that goes away early never leaves a
/// dangling global listener behind.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    entries: Entries,
    next_id: Arc<AtomicU64>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `callback`; it fires on every [`notify_all`](Self::notify_all)
    /// until the returned subscription is dropped.
    pub fn subscribe(&self, callback: impl FnMut() + Send + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback = Arc::new(Mutex::new(callback));
        self.entries.lock().unwrap().push((id, callback));
        Subscription {
            id,
            entries: Arc::downgrade(&self.entries),
        }
    }

    /// Run every live callback. Callbacks execute outside the registry lock,
    /// so they may subscribe or drop subscriptions re-entrantly.
    pub fn notify_all(&self) {
        let snapshot: Vec<Callback> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            let mut guard = callback.lock().unwrap();
            (&mut *guard)();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live attachment to a [`ListenerRegistry`]; detaches on drop.
pub struct Subscription {
    id: u64,
    entries: Weak<Mutex<Vec<(u64, Callback)>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            entries.lock().unwrap().retain(|(id, _)| *id != self.id);
        }
    }
}
