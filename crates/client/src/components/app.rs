use super::board::Board;
use super::card::Card;
use super::controls::Controls;
use super::info_panel::InfoPanel;
use crate::animation::FrameRequest;
use crate::shell::{Shell, ShellAction};
use common::model::ShellEvent;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn request_frame(func: impl FnOnce() + 'static) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let closure = Closure::once_into_js(func);
    if let Err(err) = window.request_animation_frame(closure.unchecked_ref()) {
        warn!("requestAnimationFrame failed: {:?}", err);
    }
}

fn dispatcher<T: 'static>(
    shell: &UseReducerHandle<Shell>,
    to_event: fn(T) -> ShellEvent,
) -> Callback<T> {
    let shell = shell.clone();
    Callback::from(move |value| shell.dispatch(ShellAction::Event(to_event(value))))
}

#[function_component(App)]
pub fn app() -> Html {
    let shell = use_reducer(Shell::new);

    let frame_request = use_mut_ref(FrameRequest::default);

    let cloned_shell = shell.clone();
    use_effect(move || {
        if frame_request.borrow_mut().begin(cloned_shell.is_settled()) {
            request_frame(move || {
                frame_request.borrow_mut().finish();
                cloned_shell.dispatch(ShellAction::Animate);
            });
        }
        || ()
    });

    let on_theme_event = dispatcher(&shell, |event: ShellEvent| event);
    let on_select_tab = dispatcher(&shell, ShellEvent::SelectTab);
    let on_control = dispatcher(&shell, ShellEvent::Control);

    let state = shell.state;
    let header = shell.header_poses();
    let title_style = header.first().copied().unwrap_or_default().style();
    let subtitle_style = header.get(1).copied().unwrap_or_default().style();

    html! {
        <div class={classes!("page", state.theme.class())} style={state.theme.background()}>
            <header class="page-header">
                <h1 class="title" style={title_style}>{"Chess Maestro"}</h1>
                <p class="subtitle" style={subtitle_style}>{"Your AI-powered chess companion"}</p>
            </header>
            <main class="layout">
                <Card title="Chessboard" class={classes!("card-wide")}>
                    <Board poses={shell.board_poses()} />
                </Card>
                <div class="sidebar">
                    <Card title="Game Info" content_class={classes!("flush")}>
                        <InfoPanel
                            tab={state.tab}
                            move_poses={shell.move_poses()}
                            on_select_tab={on_select_tab} />
                    </Card>
                    <Card title="Controls">
                        <Controls
                            theme={state.theme}
                            on_theme_event={on_theme_event}
                            on_control={on_control} />
                    </Card>
                </div>
            </main>
        </div>
    }
}
