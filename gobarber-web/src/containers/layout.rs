use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Frame of the signed-in pages: header on top, page below.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "dark")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header current_route={props.current_route.clone()} />
            <main class="flex-grow px-4">
                { props.children.clone() }
            </main>
        </div>
    }
}
