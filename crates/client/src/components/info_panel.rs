use crate::shell::Pose;
use common::model::{move_list, ActiveTab};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tab: ActiveTab,
    pub move_poses: Vec<Pose>,
    pub on_select_tab: Callback<ActiveTab>,
}

#[function_component(InfoPanel)]
pub fn info_panel(props: &Props) -> Html {
    let Props {
        tab: current,
        move_poses,
        on_select_tab,
    } = props;

    let triggers = ActiveTab::ALL.into_iter().map(|tab| {
        let active = tab == *current;
        let onclick = on_select_tab.reform(move |_: web_sys::MouseEvent| tab);
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab-trigger", active.then(|| "active"))}
                aria-selected={active.to_string()}
                onclick={onclick}>
                {tab.label()}
            </button>
        }
    });

    let content = match current {
        ActiveTab::Board => {
            let entries = move_list().into_iter().enumerate().map(|(i, entry)| {
                let pose = move_poses.get(i).copied().unwrap_or_default();
                html! {
                    <div key={entry.number.to_string()} class="move-entry" style={pose.style()}>
                        <span class="move-number">{format!("{}.", entry.number)}</span>
                        <span class="move-white">{entry.white}</span>
                        <span class="move-black">{entry.black}</span>
                    </div>
                }
            });
            html! {
                <div class="move-list">
                    {for entries}
                </div>
            }
        }
        ActiveTab::Analysis => html! {
            <p class="analysis">{"AI analysis in progress..."}</p>
        },
    };

    html! {
        <div class="tabs">
            <div class="tab-list" role="tablist">
                {for triggers}
            </div>
            <div class="tab-content" role="tabpanel" data-tab={current.name()}>
                {content}
            </div>
        </div>
    }
}
