use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Behavior of `GET /api`.
///
/// The application this server replaces carried two handlers for the same
/// route. `Dump` is the canonical one; `PostOnly` reproduces the other only
/// when asked for explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListingMode {
    /// Respond with every stored user as a JSON array.
    #[default]
    Dump,
    /// Refuse the request with 405 and `Allow: POST`.
    PostOnly,
}

#[derive(Parser, Debug)]
#[command(name = "chess-maestro-server")]
#[command(about = "User listing endpoint for Chess Maestro")]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "CHESS_MAESTRO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "CHESS_MAESTRO_PORT", default_value_t = 9000)]
    pub port: u16,

    /// JSON file holding the user table
    #[arg(long, env = "CHESS_MAESTRO_USERS", default_value = "users.json")]
    pub users: PathBuf,

    #[arg(
        long,
        value_enum,
        env = "CHESS_MAESTRO_LISTING_MODE",
        default_value_t = ListingMode::Dump
    )]
    pub listing_mode: ListingMode,
}
