//! Route-level authentication gating.

mod guard;

pub use guard::{
    DASHBOARD_PATH, GuardDecision, GuardedRoute, RouteDescriptor, RouteGuard, SIGN_IN_PATH,
};
