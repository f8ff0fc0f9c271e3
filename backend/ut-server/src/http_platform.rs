//! `HostPlatform` backed by a single HTTP request

use ut_dashboard::{HostPlatform, RenderCallback};

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use http::HeaderMap;
use log::{debug, warn};

/// A widget registered during dashboard setup.
#[derive(Clone)]
pub struct RegisteredWidget {
    pub key: String,
    pub title: String,
    pub render: RenderCallback,
}

impl fmt::Debug for RegisteredWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredWidget")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Reads the logged-in user from a trusted request header and collects
/// dashboard widgets registered while the request is handled.
pub struct HttpPlatform {
    user_id: Option<i64>,
    widgets: Mutex<Vec<RegisteredWidget>>,
}

impl HttpPlatform {
    pub fn new(user_id: Option<i64>) -> Self {
        Self {
            user_id,
            widgets: Mutex::new(Vec::new()),
        }
    }

    /// A missing header means anonymous. A header that is not a positive
    /// integer is logged and also treated as anonymous.
    pub fn from_headers(headers: &HeaderMap, user_header: &str) -> Self {
        let Some(value) = headers.get(user_header) else {
            return Self::new(None);
        };

        let user_id = match value.to_str().ok().map(|s| s.trim().parse::<i64>()) {
            Some(Ok(id)) if id > 0 => {
                debug!("Using user ID from {} header: {}", user_header, id);
                Some(id)
            }
            _ => {
                warn!("Invalid user ID in {} header: {:?}", user_header, value);
                None
            }
        };

        Self::new(user_id)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// Registered widgets in registration order.
    pub fn widgets(&self) -> Vec<RegisteredWidget> {
        self.lock_widgets().clone()
    }

    fn lock_widgets(&self) -> MutexGuard<'_, Vec<RegisteredWidget>> {
        self.widgets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostPlatform for HttpPlatform {
    fn is_user_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    fn current_user_id(&self) -> i64 {
        self.user_id.unwrap_or_default()
    }

    fn add_dashboard_widget(&self, key: &str, title: &str, render: RenderCallback) {
        let mut widgets = self.lock_widgets();
        let widget = RegisteredWidget {
            key: key.to_string(),
            title: title.to_string(),
            render,
        };

        // Re-registering a key replaces the earlier widget
        match widgets.iter_mut().find(|w| w.key == key) {
            Some(existing) => *existing = widget,
            None => widgets.push(widget),
        }
    }
}
