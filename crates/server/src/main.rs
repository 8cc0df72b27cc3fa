mod config;
mod error;
mod routes;
mod state;
mod store;

use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use config::{Args, ListingMode};
use state::AppState;
use std::sync::Arc;
use store::JsonFileUserStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let store = JsonFileUserStore::new(args.users.clone());
    info!("Reading users from {}", store.path().display());
    if args.listing_mode == ListingMode::PostOnly {
        warn!("GET /api will answer 405; user rows are never returned in this mode");
    }

    let app_state = web::Data::new(AppState::new(Arc::new(store), args.listing_mode));

    info!("Starting server on {}:{}", args.host, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((args.host, args.port))?
    .run()
    .await
}
