mod config;
mod models;
mod professor;
mod protocol;
mod state;
mod store;
mod utils;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, state::AppState, store::provider::MockProvider};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let state = AppState::new(config.transition_policy, Arc::new(MockProvider));
    state.identify(config.identity)?;

    tracing::info!(
        bind = %config.bind_addr,
        policy = ?config.transition_policy,
        "professor dashboard listening"
    );

    HttpServer::new(move || {
        App::new()
            .data(state.clone())
            // professor
            .service(
                web::scope("/professor")
                    .configure(professor::config),
            )
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}
