
use crate::{HostPlatform, RenderCallback};

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One `add_dashboard_widget` call
#[derive(Clone)]
pub(crate) struct Registration {
    pub(crate) key: String,
    pub(crate) title: String,
    pub(crate) render: RenderCallback,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Scriptable stand-in for the hosting platform
pub(crate) struct FakePlatform {
    logged_in: bool,
    user_id: i64,
    user_id_queries: AtomicUsize,
    registrations: Mutex<Vec<Registration>>,
}

impl FakePlatform {
    pub(crate) fn logged_out() -> Self {
        Self {
            logged_in: false,
            user_id: 0,
            user_id_queries: AtomicUsize::new(0),
            registrations: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn logged_in_as(user_id: i64) -> Self {
        Self {
            logged_in: true,
            user_id,
            ..Self::logged_out()
        }
    }

    pub(crate) fn user_id_queries(&self) -> usize {
        self.user_id_queries.load(Ordering::SeqCst)
    }

    pub(crate) fn registrations(&self) -> Vec<Registration> {
        self.registrations.lock().unwrap().clone()
    }
}

impl HostPlatform for FakePlatform {
    fn is_user_logged_in(&self) -> bool {
        self.logged_in
    }

    fn current_user_id(&self) -> i64 {
        self.user_id_queries.fetch_add(1, Ordering::SeqCst);
        self.user_id
    }

    fn add_dashboard_widget(&self, key: &str, title: &str, render: RenderCallback) {
        self.registrations
            .lock()
            .unwrap()
            .push(Registration {
                key: key.to_string(),
                title: title.to_string(),
                render,
            });
    }
}
