use shared::models::UserSummary;
use yewdux::{Context, Store};

use crate::session;

/// Reactive mirror of the session store for components that render the
/// signed-in user.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    /// The signed-in user, if any.
    pub user: Option<UserSummary>,
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        // Seeded from the hydrated session so the first render already knows
        // who is signed in.
        Self {
            user: session::shared().current_user(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
