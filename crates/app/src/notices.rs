use std::sync::{Arc, Mutex};

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A message queued for the rendering shell to display.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Cheaply-cloneable notice queue, the headless counterpart of a toast
/// provider. Every denial the resolver or guard produces lands here; the
/// shell drains and renders them.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    inner: Arc<Mutex<Vec<Notice>>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    fn push(&self, level: NoticeLevel, message: impl Into<String>) {
        self.inner.lock().unwrap().push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Take all pending notices, leaving the queue empty.
    pub fn drain(&self) -> Vec<Notice> {
        self.inner.lock().unwrap().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}
