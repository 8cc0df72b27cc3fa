use crate::shell::Pose;
use common::board::{BoardCell, Piece, Shade};
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub cell: BoardCell,
    pub pose: Pose,
}

#[function_component(Cell)]
pub fn cell(props: &Props) -> Html {
    let Props { cell, pose } = props.clone();
    let shade = match cell.shade {
        Shade::Light => "cell-light",
        Shade::Dark => "cell-dark",
    };
    let piece = cell.piece.map(|piece| match piece {
        Piece::Light => "piece-light",
        Piece::Dark => "piece-dark",
    });

    html! {
        <div class={classes!("cell", shade)} style={pose.style()}>
            {for piece.map(|piece| html! { <div class={classes!("piece", piece)} /> })}
        </div>
    }
}
