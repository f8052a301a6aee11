use std::collections::HashMap;

use shared_types::{FeatureKey, PendingRedirect, Role, Session};

/// Storage keys shared with the externally-owned login flow.
///
/// The login flow writes `token` and `role` on success and consumes
/// `redirectPath`/`requiredFeature` to resume an interrupted navigation.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "role";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const REDIRECT_PATH: &str = "redirectPath";
    pub const REQUIRED_FEATURE: &str = "requiredFeature";
}

/// Client-local persisted state, injected so the resolver and guard depend on
/// an interface rather than ambient globals. Tests run against [`MemoryStore`];
/// the embedding shell supplies whatever its platform persists to.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

/// In-memory store used by tests and ephemeral embeddings.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Assemble a [`Session`] snapshot from the store.
///
/// Recomputed on every call so it always reflects the latest persisted state;
/// nothing is cached across reads.
pub fn read_session<S: SessionStore>(store: &S) -> Session {
    let token = store.get(keys::TOKEN);
    let role = store
        .get(keys::ROLE)
        .map(|raw| Role::from_str_or_default(&raw));
    let pending_redirect = store.get(keys::REDIRECT_PATH).map(|path| PendingRedirect {
        path,
        feature: store
            .get(keys::REQUIRED_FEATURE)
            .map(|raw| FeatureKey::from_str_or_default(&raw))
            .unwrap_or_default(),
    });

    Session {
        token,
        role,
        pending_redirect,
    }
}
