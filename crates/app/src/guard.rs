use shared_types::{AccessError, Role, RoutesConfig};

use crate::auth;
use crate::notices::Notices;
use crate::store::{keys, SessionStore};

/// Outcome of a protected-route entry check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteVerdict {
    /// Render the protected content.
    Render,
    /// Not (or no longer) authenticated: to login, nothing rendered.
    RedirectToLogin,
    /// Authenticated but not authorized: to home, with a notice.
    RedirectHome,
}

impl RouteVerdict {
    /// Resolve the concrete redirect path, if any.
    pub fn target_path(&self, routes: &RoutesConfig) -> Option<String> {
        match self {
            RouteVerdict::Render => None,
            RouteVerdict::RedirectToLogin => Some(routes.login.clone()),
            RouteVerdict::RedirectHome => Some(routes.home.clone()),
        }
    }
}

/// Authorize direct entry into a route (full page load, back/forward, deep
/// link) independently of menu visibility.
///
/// The role authorized here is decoded from the token claims, not the `role`
/// mirror the menu uses, so a tampered mirror cannot widen route access. The
/// check runs on every call and caches nothing, so a role change mid-session
/// is caught on the next route entry.
pub fn check_route<S: SessionStore>(
    store: &mut S,
    notices: &Notices,
    allowed_roles: &[Role],
) -> RouteVerdict {
    let Some(token) = store.get(keys::TOKEN) else {
        tracing::debug!("route entry without token");
        return RouteVerdict::RedirectToLogin;
    };

    let role = match auth::decode_role(&token) {
        Ok(role) => role,
        Err(err) => {
            // An unparseable role cannot be safely authorized; the credential
            // is discarded and the user goes back through login.
            let denial = AccessError::unparseable(err.to_string());
            tracing::warn!(%denial, "discarding stored credential");
            store.remove(keys::TOKEN);
            notices.error(denial.user_message());
            return RouteVerdict::RedirectToLogin;
        }
    };

    if allowed_roles.contains(&role) {
        tracing::debug!(role = role.as_str(), "route entry allowed");
        RouteVerdict::Render
    } else {
        let denial = AccessError::unauthorized_route(role);
        tracing::warn!(%denial, "route entry denied");
        notices.error(denial.user_message());
        RouteVerdict::RedirectHome
    }
}
