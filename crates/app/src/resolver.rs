use shared_types::{AccessError, FeatureKey, RoutesConfig};

use crate::notices::Notices;
use crate::permissions::is_feature_allowed;
use crate::store::{keys, read_session, SessionStore};

/// Outcome of a navigation attempt.
///
/// A denial is terminal for the attempt; there are no retries. The user
/// re-initiates if they want to try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Unauthenticated: go to login; the intended destination was persisted.
    RedirectToLogin,
    /// Allowed: route to the target path.
    RedirectTo(String),
    /// Denied: stay on the current view. A notice was pushed.
    NoOp,
}

impl Action {
    /// Resolve the concrete path for this action, if it navigates anywhere.
    pub fn target_path(&self, routes: &RoutesConfig) -> Option<String> {
        match self {
            Action::RedirectToLogin => Some(routes.login.clone()),
            Action::RedirectTo(path) => Some(path.clone()),
            Action::NoOp => None,
        }
    }
}

/// Arbitrate a click-through navigation to `path`, gated by `feature`.
///
/// Unauthenticated attempts never reach the permission check: the intended
/// destination is recorded under `redirectPath`/`requiredFeature` for the
/// login flow to resume, and that is the only arm that mutates the store.
/// No network I/O anywhere.
pub fn navigate<S: SessionStore>(
    store: &mut S,
    notices: &Notices,
    path: &str,
    feature: FeatureKey,
) -> Action {
    let session = read_session(store);

    if !session.is_authenticated() {
        store.set(keys::REDIRECT_PATH, path);
        store.set(keys::REQUIRED_FEATURE, feature.as_str());
        let reason = AccessError::Unauthenticated;
        tracing::debug!(%reason, path, "redirecting to login");
        return Action::RedirectToLogin;
    }

    let role = session.effective_role();
    if is_feature_allowed(role, feature) {
        tracing::debug!(path, role = role.as_str(), "navigation allowed");
        Action::RedirectTo(path.to_string())
    } else {
        let denial = AccessError::unauthorized_feature(role, feature);
        tracing::warn!(%denial, path, "navigation denied");
        notices.error(denial.user_message());
        Action::NoOp
    }
}
