use std::fmt::Debug;

use tracing::debug;

/// Public landing page, the sign-in form.
pub const SIGN_IN_PATH: &str = "/";
/// Landing page of a signed-in user.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A route that knows whether it requires a session.
pub trait GuardedRoute {
    /// Whether only signed-in users may see the route. Routes are public
    /// unless they say otherwise.
    fn is_private(&self) -> bool {
        false
    }
}

/// Static entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    /// URL path pattern.
    pub path: &'static str,
    /// Whether the route requires a session.
    pub is_private: bool,
}

impl GuardedRoute for RouteDescriptor {
    fn is_private(&self) -> bool {
        self.is_private
    }
}

/// Outcome of a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision<R> {
    /// Mount the requested page.
    Render(R),
    /// Navigate to `to`, remembering where the user came `from`.
    Redirect {
        /// Destination of the redirect.
        to: R,
        /// Location the navigation started from.
        from: R,
    },
}

impl<R> GuardDecision<R> {
    /// Whether the target page is mounted.
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

/// Decides, per navigation, between rendering and redirecting.
///
/// The decision only depends on whether the route is private and whether a
/// user is signed in: a private route renders for signed-in users, a public
/// route renders for anonymous users, and every other combination redirects
/// to the opposite landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard<R> {
    landing: R,
    home: R,
}

impl Default for RouteGuard<String> {
    fn default() -> Self {
        Self::new(SIGN_IN_PATH.to_string(), DASHBOARD_PATH.to_string())
    }
}

impl<R: Clone + Debug> RouteGuard<R> {
    /// Creates a guard sending anonymous users to `landing` and signed-in
    /// users to `home`.
    pub fn new(landing: R, home: R) -> Self {
        Self { landing, home }
    }

    /// Decides the fate of a navigation to `target` started at `location`.
    pub fn decide(
        &self,
        is_private: bool,
        is_signed_in: bool,
        target: R,
        location: R,
    ) -> GuardDecision<R> {
        if is_private == is_signed_in {
            return GuardDecision::Render(target);
        }

        let to = if is_private {
            self.landing.clone()
        } else {
            self.home.clone()
        };
        debug!(?target, ?to, is_private, is_signed_in, "route guard redirect");
        GuardDecision::Redirect { to, from: location }
    }

    /// [`RouteGuard::decide`] for a route that carries its own flag.
    pub fn decide_route(&self, target: &R, location: &R, is_signed_in: bool) -> GuardDecision<R>
    where
        R: GuardedRoute,
    {
        self.decide(
            target.is_private(),
            is_signed_in,
            target.clone(),
            location.clone(),
        )
    }

    /// Where to go after signing in: back to the private page that caused the
    /// redirect, or home.
    pub fn resume(&self, origin: Option<&R>) -> R
    where
        R: GuardedRoute,
    {
        origin
            .filter(|origin| origin.is_private())
            .cloned()
            .unwrap_or_else(|| self.home.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Page {
        SignIn,
        Dashboard,
        Profile,
        Unflagged,
    }

    impl GuardedRoute for Page {
        fn is_private(&self) -> bool {
            matches!(self, Self::Dashboard | Self::Profile)
        }
    }

    fn page_guard() -> RouteGuard<Page> {
        RouteGuard::new(Page::SignIn, Page::Dashboard)
    }

    #[test_case(false, false, None ; "anonymous on public page renders")]
    #[test_case(true, true, None ; "signed in on private page renders")]
    #[test_case(true, false, Some("/") ; "anonymous on private page goes to sign in")]
    #[test_case(false, true, Some("/dashboard") ; "signed in on public page goes to dashboard")]
    fn test_decide_truth_table(is_private: bool, is_signed_in: bool, redirect: Option<&str>) {
        let guard = RouteGuard::default();
        let decision = guard.decide(
            is_private,
            is_signed_in,
            "/target".to_string(),
            "/origin".to_string(),
        );

        match redirect {
            None => assert_eq!(decision, GuardDecision::Render("/target".to_string())),
            Some(to) => assert_eq!(
                decision,
                GuardDecision::Redirect {
                    to: to.to_string(),
                    from: "/origin".to_string(),
                }
            ),
        }
        assert_eq!(decision.is_render(), is_private == is_signed_in);
    }

    #[test]
    fn test_unflagged_route_is_public() {
        let guard = page_guard();
        assert!(!Page::Unflagged.is_private());
        assert!(guard
            .decide_route(&Page::Unflagged, &Page::SignIn, false)
            .is_render());
        assert_eq!(
            guard.decide_route(&Page::Unflagged, &Page::SignIn, true),
            GuardDecision::Redirect {
                to: Page::Dashboard,
                from: Page::SignIn,
            }
        );
    }

    #[test]
    fn test_descriptor_carries_flag() {
        let descriptor = RouteDescriptor {
            path: "/dashboard",
            is_private: true,
        };
        assert!(descriptor.is_private());
    }

    #[test]
    fn test_decision_follows_session_changes() {
        let guard = page_guard();
        let before = guard.decide_route(&Page::Profile, &Page::Profile, true);
        let after = guard.decide_route(&Page::Profile, &Page::Profile, false);

        assert_eq!(before, GuardDecision::Render(Page::Profile));
        assert_eq!(
            after,
            GuardDecision::Redirect {
                to: Page::SignIn,
                from: Page::Profile,
            }
        );
    }

    #[test]
    fn test_resume_returns_to_private_origin() {
        let guard = page_guard();
        assert_eq!(guard.resume(Some(&Page::Profile)), Page::Profile);
        assert_eq!(guard.resume(Some(&Page::SignIn)), Page::Dashboard);
        assert_eq!(guard.resume(None), Page::Dashboard);
    }

    #[test]
    fn test_default_guard_uses_path_landings() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.decide(true, false, "/profile".to_string(), "/profile".to_string()),
            GuardDecision::Redirect {
                to: SIGN_IN_PATH.to_string(),
                from: "/profile".to_string(),
            }
        );
        assert_eq!(
            guard.decide(false, true, "/signup".to_string(), "/signup".to_string()),
            GuardDecision::Redirect {
                to: DASHBOARD_PATH.to_string(),
                from: "/signup".to_string(),
            }
        );
    }
}
