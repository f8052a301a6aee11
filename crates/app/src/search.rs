use std::sync::{Arc, Mutex};

use shared_types::{NavigationEntry, Role};

use crate::listener::{ListenerRegistry, Subscription};
use crate::menu::visible_entries;

/// Filter the menu by free text for `role`.
///
/// A blank or whitespace-only query yields nothing — the search box is
/// dormant until the user types, it never dumps the full list. Matching is a
/// case-insensitive substring test over display names, restricted to entries
/// the role can see.
pub fn search_entries(query: &str, role: Role) -> Vec<&'static NavigationEntry> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    visible_entries(role)
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Live state for the navbar search popover.
///
/// Holds the current result list and a dismissal subscription: while the
/// panel is open, an outside click (routed through the registry by the shell)
/// clears the results. Dropping the panel detaches the listener.
pub struct SearchPanel {
    results: Arc<Mutex<Vec<&'static NavigationEntry>>>,
    _dismiss: Subscription,
}

impl SearchPanel {
    pub fn open(registry: &ListenerRegistry) -> Self {
        let results: Arc<Mutex<Vec<&'static NavigationEntry>>> = Arc::default();
        let cleared = results.clone();
        let _dismiss = registry.subscribe(move || {
            cleared.lock().unwrap().clear();
        });
        Self { results, _dismiss }
    }

    /// Re-run the search with the latest query text.
    pub fn set_query(&self, query: &str, role: Role) {
        *self.results.lock().unwrap() = search_entries(query, role);
    }

    pub fn results(&self) -> Vec<&'static NavigationEntry> {
        self.results.lock().unwrap().clone()
    }
}
