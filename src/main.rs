// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness Frog web server.

use fitness_frog::{
    config::Config, db::InMemoryEntryRepository, services::ActivityCatalog, AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Fitness Frog");

    // Activity reference data
    let activities = match &config.activities_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading activities");
            ActivityCatalog::load_from_file(path)?
        }
        None => ActivityCatalog::default(),
    };

    // Entry storage
    let entries = if config.seed_sample_data {
        InMemoryEntryRepository::with_sample_entries()
    } else {
        InMemoryEntryRepository::new()
    };

    // Build shared state
    let state = Arc::new(AppState {
        entries: Arc::new(entries),
        activities,
    });

    // Build router
    let app = fitness_frog::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitness_frog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
