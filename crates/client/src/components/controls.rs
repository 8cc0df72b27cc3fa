use super::button::IconButton;
use common::model::{ControlButton, ShellEvent, ThemeMenu};
use common::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub theme: Theme,
    pub on_theme_event: Callback<ShellEvent>,
    pub on_control: Callback<ControlButton>,
}

#[function_component(Controls)]
pub fn controls(props: &Props) -> Html {
    let Props {
        theme,
        on_theme_event,
        on_control,
    } = props;
    let menu = use_state(ThemeMenu::default);

    let buttons = ControlButton::ALL.into_iter().map(|button| {
        let onclick = on_control.reform(move |_: web_sys::MouseEvent| button);
        html! {
            <IconButton label={button.label()} onclick={onclick}>{button.icon()}</IconButton>
        }
    });

    let cloned_menu = menu.clone();
    let toggle_menu =
        Callback::from(move |_: web_sys::MouseEvent| cloned_menu.set(cloned_menu.toggled()));

    let items = Theme::ALL.into_iter().map(|item| {
        let on_theme_event = on_theme_event.clone();
        let menu = menu.clone();
        let onclick = Callback::from(move |_: web_sys::MouseEvent| {
            let (closed, event) = menu.choose(item);
            menu.set(closed);
            on_theme_event.emit(event);
        });
        html! {
            <button
                type="button"
                role="menuitem"
                class={classes!("menu-item", (item == *theme).then(|| "selected"))}
                onclick={onclick}>
                {item.label()}
            </button>
        }
    });

    html! {
        <div class="control-bar">
            {for buttons}
            <div class="menu-anchor">
                <IconButton label="Settings" onclick={toggle_menu}>{"\u{2699}"}</IconButton>
                {for menu.is_open().then(|| html! {
                    <div class="menu" role="menu">
                        {for items}
                    </div>
                })}
            </div>
        </div>
    }
}
