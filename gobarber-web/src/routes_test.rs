//! Tests for the routing system
//!
//! Validates the route table, the private flags and the guard decisions for
//! the application's routes.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, route_table};
    use shared::routing::{GuardDecision, GuardedRoute};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn test_route_table() {
        let table = route_table();
        let entries: Vec<_> = table
            .iter()
            .map(|entry| (entry.path, entry.is_private))
            .collect();

        assert_eq!(
            entries,
            vec![
                ("/", false),
                ("/signup", false),
                ("/dashboard", true),
                ("/profile", true),
                ("/404", false),
            ]
        );
    }

    #[test]
    fn test_paths_match_router_paths() {
        for route in MainRoute::iter() {
            assert_eq!(route.to_path(), route.path(), "{route:?}");
        }
    }

    #[test]
    fn test_route_matching() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::SignIn));
        assert_eq!(MainRoute::recognize("/signup"), Some(MainRoute::SignUp));
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::Dashboard));
        assert_eq!(MainRoute::recognize("/profile"), Some(MainRoute::Profile));
    }

    #[test]
    fn test_only_dashboard_and_profile_are_private() {
        let private: Vec<_> = MainRoute::iter().filter(|route| route.is_private()).collect();
        assert_eq!(private, vec![MainRoute::Dashboard, MainRoute::Profile]);
    }

    #[test]
    fn test_anonymous_visit_to_dashboard_redirects_to_sign_in() {
        let guard = MainRoute::guard();
        let decision = guard.decide_route(&MainRoute::Dashboard, &MainRoute::Dashboard, false);
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: MainRoute::SignIn,
                from: MainRoute::Dashboard,
            }
        );
    }

    #[test]
    fn test_signed_in_visit_to_sign_up_redirects_to_dashboard() {
        let guard = MainRoute::guard();
        let decision = guard.decide_route(&MainRoute::SignUp, &MainRoute::SignUp, true);
        assert!(matches!(
            decision,
            GuardDecision::Redirect {
                to: MainRoute::Dashboard,
                ..
            }
        ));
    }

    #[test]
    fn test_resume_after_sign_in() {
        let guard = MainRoute::guard();
        assert_eq!(guard.resume(Some(&MainRoute::Profile)), MainRoute::Profile);
        assert_eq!(guard.resume(Some(&MainRoute::SignUp)), MainRoute::Dashboard);
        assert_eq!(guard.resume(None), MainRoute::Dashboard);
    }

    #[test]
    fn test_public_pages_render_for_anonymous_users() {
        let guard = MainRoute::guard();
        for route in [MainRoute::SignIn, MainRoute::SignUp, MainRoute::NotFound] {
            assert!(guard.decide_route(&route, &route, false).is_render());
        }
    }
}
