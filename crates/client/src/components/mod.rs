pub mod app;
pub mod board;
pub mod button;
pub mod card;
pub mod cell;
pub mod controls;
pub mod info_panel;
