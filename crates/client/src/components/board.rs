use super::cell::Cell;
use crate::shell::Pose;
use common::board::cells;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub poses: Vec<Pose>,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props { poses } = props;
    let squares = cells().map(|cell| {
        let pose = poses.get(cell.index).copied().unwrap_or_default();
        html! {
            <Cell key={cell.index.to_string()} cell={cell} pose={pose} />
        }
    });

    html! {
        <div class="board-frame">
            <div class="board">
                {for squares}
            </div>
        </div>
    }
}
