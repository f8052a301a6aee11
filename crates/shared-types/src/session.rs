use serde::{Deserialize, Serialize};

use crate::{FeatureKey, Role};

/// Destination remembered when an unauthenticated user attempts a gated
/// action, consumed after login completes (the login flow itself is owned by
/// the backend).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRedirect {
    pub path: String,
    pub feature: FeatureKey,
}

/// Snapshot of the client-held authentication state.
///
/// `token` is an opaque credential; its absence means "unauthenticated".
/// `role` is the lower-cased role string the login flow mirrors into storage,
/// already normalized. The route guard re-derives the role from the token
/// claims instead of trusting this mirror.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub pending_redirect: Option<PendingRedirect>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The role used for menu assembly. A token with no usable role mirror
    /// normalizes to `Unknown` so it grants nothing.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(Role::Unknown)
    }
}
