use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: &'static str,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclick: Callback<web_sys::MouseEvent>,
}

#[function_component(IconButton)]
pub fn icon_button(props: &Props) -> Html {
    let Props {
        label,
        children,
        onclick,
    } = props;

    html! {
        <button
            type="button"
            class="icon-button"
            title={*label}
            aria-label={*label}
            onclick={onclick.clone()}>
            {for children.iter()}
        </button>
    }
}
