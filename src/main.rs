// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Tunisia Travel Magic API Server
//!
//! Serves the hotel catalog and generates day-by-day trip itineraries from
//! points of interest around a chosen hotel.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunisia_trip_planner::{
    config::Config,
    services::{GeoDataService, PlannerService, RegionCatalog},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Tunisia Travel Magic API");

    // Load the POI collections; failures degrade to empty collections
    let source = config.data_source();
    tracing::info!(source = ?source, "Loading POI collections");
    let geodata = GeoDataService::load(&source).await;
    tracing::info!(
        hotels = geodata.hotels().len(),
        museums = geodata.museums().len(),
        attractions = geodata.attractions().len(),
        restaurants = geodata.restaurants().len(),
        cafes = geodata.cafes().len(),
        "POI collections ready"
    );

    // Planner with its per-hotel proximity cache
    let planner = PlannerService::new(config.radii);

    // Curated content for the special regions
    let regions = RegionCatalog::new();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        geodata,
        planner,
        regions,
    });

    // Build router
    let app = tunisia_trip_planner::routes::create_router(state);

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
                .add_directive("tunisia_trip_planner=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
