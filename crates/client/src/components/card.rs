use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub content_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &Props) -> Html {
    let Props {
        title,
        class,
        content_class,
        children,
    } = props;

    html! {
        <section class={classes!("card", class.clone())}>
            <header class="card-header">
                <h2 class="card-title">{*title}</h2>
            </header>
            <div class={classes!("card-content", content_class.clone())}>
                {for children.iter()}
            </div>
        </section>
    }
}
