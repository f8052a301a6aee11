use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{FeatureKey, Role};

/// Outcome classification for a failed access attempt.
///
/// Every variant is user-visible (notice or redirect-with-message); none are
/// silently swallowed, and none trigger an automatic retry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AccessError {
    /// No token in the session. Recoverable by logging in; the intended
    /// destination is preserved for resumption.
    Unauthenticated,
    /// Token present but its claims could not be decoded (malformed or
    /// expired). Fatal for the session: the token is discarded.
    UnparseableCredential { reason: String },
    /// Valid session, but the role lacks the feature or route. The user stays
    /// authenticated and is routed to a safe default. `feature` is absent for
    /// route-level denials, where only the role set is configured.
    Unauthorized {
        role: Role,
        feature: Option<FeatureKey>,
    },
}

impl AccessError {
    pub fn unparseable(reason: impl Into<String>) -> Self {
        AccessError::UnparseableCredential {
            reason: reason.into(),
        }
    }

    pub fn unauthorized_feature(role: Role, feature: FeatureKey) -> Self {
        AccessError::Unauthorized {
            role,
            feature: Some(feature),
        }
    }

    pub fn unauthorized_route(role: Role) -> Self {
        AccessError::Unauthorized {
            role,
            feature: None,
        }
    }

    /// Message shown to the user when the attempt is denied.
    pub fn user_message(&self) -> String {
        match self {
            AccessError::Unauthenticated => "Please sign in to continue.".to_string(),
            AccessError::UnparseableCredential { .. } => {
                "Your session is no longer valid. Please sign in again.".to_string()
            }
            AccessError::Unauthorized { .. } => {
                "You don't have access to that area.".to_string()
            }
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::Unauthenticated => write!(f, "unauthenticated"),
            AccessError::UnparseableCredential { reason } => {
                write!(f, "unparseable credential: {}", reason)
            }
            AccessError::Unauthorized {
                role,
                feature: Some(feature),
            } => write!(
                f,
                "role '{}' not authorized for feature '{}'",
                role.as_str(),
                feature.as_str()
            ),
            AccessError::Unauthorized {
                role,
                feature: None,
            } => write!(f, "role '{}' not authorized for this route", role.as_str()),
        }
    }
}

impl std::error::Error for AccessError {}
