// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Point-of-interest model and the grouped result types built from it.

use geo::Point;

/// The five GeoJSON collections the planner loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiCollection {
    Hotels,
    Museums,
    Attractions,
    Restaurants,
    Cafes,
}

impl PoiCollection {
    /// All collections, in load order.
    pub const ALL: [PoiCollection; 5] = [
        PoiCollection::Hotels,
        PoiCollection::Museums,
        PoiCollection::Attractions,
        PoiCollection::Restaurants,
        PoiCollection::Cafes,
    ];

    /// Collection name, matching the GeoJSON file stem (e.g. `hotels.geojson`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PoiCollection::Hotels => "hotels",
            PoiCollection::Museums => "museums",
            PoiCollection::Attractions => "attractions",
            PoiCollection::Restaurants => "restaurants",
            PoiCollection::Cafes => "cafes",
        }
    }
}

/// A point of interest from one of the loaded collections.
#[derive(Debug, Clone)]
pub struct Poi {
    /// Stable identifier: the GeoJSON feature id, or `{collection}-{index}`
    /// when the source feature carries none.
    pub id: String,
    /// Display name from the feature properties, absent when unnamed.
    pub name: Option<String>,
    /// City, from `addr:city` or `city` when present.
    pub city: Option<String>,
    /// Location (x = longitude, y = latitude).
    pub location: Point<f64>,
}

impl Poi {
    /// Display name, with a neutral fallback for unnamed features.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

/// POIs within themed radii of a hotel, grouped by collection.
#[derive(Debug, Clone, Default)]
pub struct NearbyPois {
    pub museums: Vec<Poi>,
    pub attractions: Vec<Poi>,
    pub restaurants: Vec<Poi>,
    pub cafes: Vec<Poi>,
}

/// Nearby attractions bucketed by name keywords.
///
/// A single attraction may appear in several themed buckets; `other` holds
/// attractions matching none of the themed keyword lists.
#[derive(Debug, Clone, Default)]
pub struct CategorizedAttractions {
    pub beaches: Vec<Poi>,
    pub parks: Vec<Poi>,
    pub historical: Vec<Poi>,
    pub viewpoints: Vec<Poi>,
    pub other: Vec<Poi>,
}
