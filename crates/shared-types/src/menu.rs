use crate::{FeatureKey, Role};

/// A single menu item binding a display name, a target path, and the feature
/// key checked when the user clicks through.
///
/// `allowed_roles` drives menu assembly only; the authoritative gate at
/// navigation time is the role-permission table. The two are kept in
/// agreement by `app`'s entry validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub display_name: &'static str,
    pub target_path: &'static str,
    pub feature: FeatureKey,
    pub allowed_roles: &'static [Role],
}

impl NavigationEntry {
    /// Whether this entry appears in the menu for `role`.
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Case-insensitive substring match against the display name.
    pub fn matches_query(&self, query: &str) -> bool {
        self.display_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}
