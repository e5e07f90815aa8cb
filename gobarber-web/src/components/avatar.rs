use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: String,
    #[prop_or_default]
    pub url: Option<String>,
    #[prop_or("w-14")]
    pub size: &'static str,
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Round user picture, falling back to the initials of `name`.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    match &props.url {
        Some(url) => html! {
            <div class="avatar">
                <div class={classes!("rounded-full", props.size)}>
                    <img src={url.clone()} alt={props.name.clone()} />
                </div>
            </div>
        },
        None => html! {
            <div class="avatar placeholder">
                <div class={classes!("rounded-full", "bg-neutral", "text-neutral-content", props.size)}>
                    <span>{ initials(&props.name) }</span>
                </div>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Roberto Morel"), "RM");
        assert_eq!(initials("ana maria braga"), "AM");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }
}
