use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::routing::{GuardDecision, GuardedRoute, RouteDescriptor, RouteGuard};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl GuardedRoute for MainRoute {
    fn is_private(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Profile)
    }
}

impl MainRoute {
    /// Path pattern of the route.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Route table entry of the route.
    pub fn descriptor(&self) -> RouteDescriptor {
        RouteDescriptor {
            path: self.path(),
            is_private: self.is_private(),
        }
    }

    /// Guard sending anonymous users to the sign-in form and signed-in users
    /// to the dashboard.
    pub fn guard() -> RouteGuard<Self> {
        RouteGuard::new(Self::SignIn, Self::Dashboard)
    }
}

/// Static route table.
pub fn route_table() -> Vec<RouteDescriptor> {
    MainRoute::iter().map(|route| route.descriptor()).collect()
}

#[derive(Properties, PartialEq)]
pub struct RedirectWithOriginProps {
    pub to: MainRoute,
    pub from: MainRoute,
}

/// Replaces the current history entry with `to`, carrying `from` as the
/// location state so the sign-in form can send the user back.
#[function_component(RedirectWithOrigin)]
fn redirect_with_origin(props: &RedirectWithOriginProps) -> Html {
    let navigator = use_navigator();
    use_effect_with(
        (props.to.clone(), props.from.clone()),
        move |(to, from)| {
            if let Some(navigator) = navigator {
                navigator.replace_with_state(to, from.clone());
            }
            || ()
        },
    );
    Html::default()
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_signed_in = use_selector(|state: &AppState| state.user.is_some());
    let origin = use_location().and_then(|location| location.state::<MainRoute>());
    let guard = MainRoute::guard();

    match guard.decide_route(&props.route, &props.route, *is_signed_in) {
        GuardDecision::Render(route) => render(route),
        GuardDecision::Redirect { to, from } => {
            // Signed in on a public page: resume the page that demanded a session.
            let to = if props.route.is_private() {
                to
            } else {
                guard.resume(origin.as_deref())
            };
            html! { <RedirectWithOrigin {to} {from} /> }
        }
    }
}

fn render(route: MainRoute) -> Html {
    match route {
        MainRoute::SignIn => html! { <SignInPage /> },
        MainRoute::SignUp => html! { <SignUpPage /> },
        MainRoute::Dashboard => html! {
            <Layout current_route={MainRoute::Dashboard}>
                <DashboardPage />
            </Layout>
        },
        MainRoute::Profile => html! {
            <Layout current_route={MainRoute::Profile}>
                <ProfilePage />
            </Layout>
        },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("Switching to main route: {route:?}");
    html! { <MainRouteView {route} /> }
}
