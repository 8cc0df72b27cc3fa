pub mod board;
pub mod error;
pub mod model;
pub mod theme;
