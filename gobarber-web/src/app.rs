use crate::routes::{MainRoute, switch};
use crate::session::SessionContext;
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| SessionContext::default());

    html! {
        <ContextProvider<SessionContext> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}
