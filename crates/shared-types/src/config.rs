use serde::{Deserialize, Serialize};

/// Navbar notification polling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Seconds between unread-count recomputes for the badge.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    5
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Well-known routes the access layer redirects to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutesConfig {
    #[serde(default = "default_home_route")]
    pub home: String,
    #[serde(default = "default_login_route")]
    pub login: String,
}

fn default_home_route() -> String {
    "/".to_string()
}

fn default_login_route() -> String {
    "/login".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home_route(),
            login: default_login_route(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a serde default so a missing or incomplete config file
/// yields the stock behavior. The permission table and navigation list are
/// compile-time data, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}
