// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

use geo::Point;
use std::sync::Arc;
use tunisia_trip_planner::config::Config;
use tunisia_trip_planner::models::Poi;
use tunisia_trip_planner::routes::create_router;
use tunisia_trip_planner::services::{GeoDataService, PlannerService, RegionCatalog};
use tunisia_trip_planner::AppState;

#[allow(dead_code)]
pub fn poi(id: &str, name: Option<&str>, city: Option<&str>, lon: f64, lat: f64) -> Poi {
    Poi {
        id: id.to_string(),
        name: name.map(|s| s.to_string()),
        city: city.map(|s| s.to_string()),
        location: Point::new(lon, lat),
    }
}

/// Fixture collections around Tunis, Sidi Bou Said, and Hammamet.
///
/// The Tunis hotel sees one museum and two restaurants but no cafes or
/// attractions in range; the Hammamet hotel sees only attractions (a beach
/// and a sunset viewpoint); the Zaghouan hotel is in a special region.
#[allow(dead_code)]
pub fn test_geodata() -> GeoDataService {
    let hotels = vec![
        poi(
            "hotel-tunis",
            Some("Hotel Carlton"),
            Some("Tunis"),
            10.1815,
            36.8008,
        ),
        poi(
            "hotel-sbs",
            Some("Hotel Dar Said"),
            Some("Sidi Bou Said"),
            10.3470,
            36.8687,
        ),
        poi(
            "hotel-zaghouan",
            Some("Dar Zaghouan"),
            Some("Zaghouan"),
            10.1429,
            36.4029,
        ),
        poi("hotel-unnamed", None, Some("Tunis"), 10.1900, 36.8100),
        poi(
            "hotel-yasmine",
            Some("Hotel Yasmine"),
            Some("Hammamet"),
            10.6120,
            36.4000,
        ),
    ];

    // ~2 km north of the Tunis hotel.
    let museums = vec![poi(
        "museum-bardo",
        Some("Bardo National Museum"),
        Some("Tunis"),
        10.1815,
        36.8188,
    )];

    // Out of range of the Tunis and Sidi Bou Said hotels, in range of the
    // Hammamet hotel.
    let attractions = vec![
        poi(
            "attr-plage",
            Some("Plage Hammamet"),
            Some("Hammamet"),
            10.6120,
            36.3770,
        ),
        poi(
            "attr-sunset",
            Some("Sunset Panorama Point"),
            Some("Hammamet"),
            10.6000,
            36.4100,
        ),
    ];

    // ~1 km and ~3 km from the Tunis hotel.
    let restaurants = vec![
        poi(
            "rest-jeld",
            Some("Dar El Jeld"),
            Some("Tunis"),
            10.1815,
            36.8098,
        ),
        poi(
            "rest-golfe",
            Some("Le Golfe"),
            Some("Tunis"),
            10.1815,
            36.8278,
        ),
    ];

    // In range of the Sidi Bou Said hotel only.
    let cafes = vec![poi(
        "cafe-delices",
        Some("Café des Délices"),
        Some("Sidi Bou Said"),
        10.3480,
        36.8700,
    )];

    GeoDataService::from_collections(hotels, museums, attractions, restaurants, cafes)
}

/// Create a test app over the fixture data.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let geodata = test_geodata();
    let planner = PlannerService::new(config.radii);
    let regions = RegionCatalog::new();

    let state = Arc::new(AppState {
        config,
        geodata,
        planner,
        regions,
    });

    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
