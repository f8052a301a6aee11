use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client-local notification record.
///
/// These live entirely in client-local storage: best-effort bookkeeping for
/// the navbar badge, never synchronized back to a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub date: DateTime<Utc>,
    /// In-app path the notification links to.
    pub link: String,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            date: Utc::now(),
            link: link.into(),
            read: false,
        }
    }
}
