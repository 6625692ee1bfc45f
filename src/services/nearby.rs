// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Proximity filtering: haversine distance and per-category radius search.

use geo::Point;

use crate::models::{NearbyPois, Poi};
use crate::services::geodata::GeoDataService;

/// Mean Earth radius in kilometers (spherical model).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radii in kilometers for each POI category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRadii {
    pub museums_km: f64,
    pub attractions_km: f64,
    pub restaurants_km: f64,
    pub cafes_km: f64,
}

impl Default for SearchRadii {
    fn default() -> Self {
        Self {
            museums_km: 20.0,
            attractions_km: 20.0,
            restaurants_km: 5.0,
            cafes_km: 3.0,
        }
    }
}

/// Great-circle distance in kilometers between two points on a spherical
/// Earth (x = longitude, y = latitude, degrees).
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Filter `candidates` to those within `max_distance_km` of `origin`,
/// preserving input order. Points exactly at the radius are included.
pub fn find_nearby<'a>(
    origin: Point<f64>,
    candidates: &'a [Poi],
    max_distance_km: f64,
) -> Vec<&'a Poi> {
    debug_assert!(
        !origin.x().is_nan() && !origin.y().is_nan(),
        "origin coordinates must not be NaN"
    );

    candidates
        .iter()
        .filter(|poi| haversine_km(origin, poi.location) <= max_distance_km)
        .collect()
}

impl NearbyPois {
    /// Collect the POIs within the per-category radii of `hotel`.
    pub fn around(hotel: &Poi, data: &GeoDataService, radii: &SearchRadii) -> Self {
        let origin = hotel.location;
        let collect = |candidates: &[Poi], radius_km: f64| -> Vec<Poi> {
            find_nearby(origin, candidates, radius_km)
                .into_iter()
                .cloned()
                .collect()
        };

        Self {
            museums: collect(data.museums(), radii.museums_km),
            attractions: collect(data.attractions(), radii.attractions_km),
            restaurants: collect(data.restaurants(), radii.restaurants_km),
            cafes: collect(data.cafes(), radii.cafes_km),
        }
    }
}
