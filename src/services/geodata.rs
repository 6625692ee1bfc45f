// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Loading and in-memory storage of the five POI collections.

use std::path::PathBuf;

use geo::Point;
use geojson::GeoJson;

use crate::models::{Poi, PoiCollection};

/// Where the GeoJSON collections come from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local directory holding one `{collection}.geojson` file per collection.
    Dir(PathBuf),
    /// HTTP base URL serving `{collection}.geojson` documents.
    BaseUrl(String),
}

/// Service holding the loaded POI collections, immutable for the process
/// lifetime.
#[derive(Default, Clone)]
pub struct GeoDataService {
    hotels: Vec<Poi>,
    museums: Vec<Poi>,
    attractions: Vec<Poi>,
    restaurants: Vec<Poi>,
    cafes: Vec<Poi>,
}

impl GeoDataService {
    /// Assemble a service from already-parsed collections.
    pub fn from_collections(
        hotels: Vec<Poi>,
        museums: Vec<Poi>,
        attractions: Vec<Poi>,
        restaurants: Vec<Poi>,
        cafes: Vec<Poi>,
    ) -> Self {
        Self {
            hotels,
            museums,
            attractions,
            restaurants,
            cafes,
        }
    }

    /// Load all five collections concurrently from `source`.
    ///
    /// A collection that fails to load or parse degrades to an empty list so
    /// the rest of the data stays usable; the failure is logged.
    pub async fn load(source: &DataSource) -> Self {
        let http = reqwest::Client::new();

        let (hotels, museums, attractions, restaurants, cafes) = tokio::join!(
            Self::load_collection(source, &http, PoiCollection::Hotels),
            Self::load_collection(source, &http, PoiCollection::Museums),
            Self::load_collection(source, &http, PoiCollection::Attractions),
            Self::load_collection(source, &http, PoiCollection::Restaurants),
            Self::load_collection(source, &http, PoiCollection::Cafes),
        );

        Self::from_collections(hotels, museums, attractions, restaurants, cafes)
    }

    /// Load one collection, degrading to empty on any failure.
    async fn load_collection(
        source: &DataSource,
        http: &reqwest::Client,
        collection: PoiCollection,
    ) -> Vec<Poi> {
        match Self::fetch_collection(source, http, collection).await {
            Ok(pois) => {
                tracing::info!(
                    collection = collection.as_str(),
                    count = pois.len(),
                    "Loaded POI collection"
                );
                pois
            }
            Err(e) => {
                tracing::warn!(
                    collection = collection.as_str(),
                    error = %e,
                    "Failed to load POI collection, continuing without it"
                );
                Vec::new()
            }
        }
    }

    async fn fetch_collection(
        source: &DataSource,
        http: &reqwest::Client,
        collection: PoiCollection,
    ) -> Result<Vec<Poi>, GeoDataError> {
        let json = match source {
            DataSource::Dir(dir) => {
                let path = dir.join(format!("{}.geojson", collection.as_str()));
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| GeoDataError::Io(e.to_string()))?
            }
            DataSource::BaseUrl(base) => {
                let url = format!("{}/{}.geojson", base.trim_end_matches('/'), collection.as_str());
                let response = http
                    .get(&url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| GeoDataError::Http(e.to_string()))?;
                response
                    .text()
                    .await
                    .map_err(|e| GeoDataError::Http(e.to_string()))?
            }
        };

        Self::parse_collection(&json, collection)
    }

    /// Parse one GeoJSON FeatureCollection into POIs.
    ///
    /// Features without geometry, or with non-Point geometry, are skipped.
    /// Ids come from the feature id when present, else `{collection}-{index}`.
    pub fn parse_collection(
        json: &str,
        collection: PoiCollection,
    ) -> Result<Vec<Poi>, GeoDataError> {
        let geojson: GeoJson = json
            .parse()
            .map_err(|e: geojson::Error| GeoDataError::Parse(e.to_string()))?;

        let GeoJson::FeatureCollection(fc) = geojson else {
            return Err(GeoDataError::NotACollection);
        };

        let mut pois = Vec::new();

        for (index, feature) in fc.features.into_iter().enumerate() {
            let name = feature
                .property("name")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());

            let city = feature
                .property("addr:city")
                .or_else(|| feature.property("city"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());

            let id = match &feature.id {
                Some(geojson::feature::Id::String(s)) => s.clone(),
                Some(geojson::feature::Id::Number(n)) => n.to_string(),
                None => format!("{}-{}", collection.as_str(), index),
            };

            let Some(geometry) = feature.geometry else {
                continue;
            };
            let location: Point<f64> = match geometry.value.try_into() {
                Ok(point) => point,
                // Only Point features carry a plannable location.
                Err(_) => continue,
            };

            pois.push(Poi {
                id,
                name,
                city,
                location,
            });
        }

        Ok(pois)
    }

    pub fn hotels(&self) -> &[Poi] {
        &self.hotels
    }

    pub fn museums(&self) -> &[Poi] {
        &self.museums
    }

    pub fn attractions(&self) -> &[Poi] {
        &self.attractions
    }

    pub fn restaurants(&self) -> &[Poi] {
        &self.restaurants
    }

    pub fn cafes(&self) -> &[Poi] {
        &self.cafes
    }

    /// Look up a hotel by its stable id.
    pub fn hotel_by_id(&self, id: &str) -> Option<&Poi> {
        self.hotels.iter().find(|h| h.id == id)
    }
}

/// Errors from loading a single collection.
#[derive(Debug, thiserror::Error)]
pub enum GeoDataError {
    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Failed to fetch collection: {0}")]
    Http(String),

    #[error("Failed to parse GeoJSON: {0}")]
    Parse(String),

    #[error("Expected a FeatureCollection")]
    NotACollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_extracts_fields() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "node/1001",
                    "properties": {"name": "Hotel Dar Said", "addr:city": "Sidi Bou Said"},
                    "geometry": {"type": "Point", "coordinates": [10.3470, 36.8687]}
                },
                {
                    "type": "Feature",
                    "id": 42,
                    "properties": {"name": "Hotel Carlton", "city": "Tunis"},
                    "geometry": {"type": "Point", "coordinates": [10.1815, 36.8008]}
                }
            ]
        }"#;

        let pois = GeoDataService::parse_collection(json, PoiCollection::Hotels).unwrap();
        assert_eq!(pois.len(), 2);

        assert_eq!(pois[0].id, "node/1001");
        assert_eq!(pois[0].name.as_deref(), Some("Hotel Dar Said"));
        assert_eq!(pois[0].city.as_deref(), Some("Sidi Bou Said"));
        assert_eq!(pois[0].location.x(), 10.3470);
        assert_eq!(pois[0].location.y(), 36.8687);

        // Numeric feature ids are stringified; `city` is the addr:city fallback.
        assert_eq!(pois[1].id, "42");
        assert_eq!(pois[1].city.as_deref(), Some("Tunis"));
    }

    #[test]
    fn test_parse_collection_generates_missing_ids() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "Point", "coordinates": [10.0, 36.0]}
                }
            ]
        }"#;

        let pois = GeoDataService::parse_collection(json, PoiCollection::Cafes).unwrap();
        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].id, "cafes-0");
        assert_eq!(pois[0].name, None);
        assert_eq!(pois[0].display_name(), "Unnamed");
    }

    #[test]
    fn test_parse_collection_skips_non_point_features() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "Some Boundary"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[10.0, 36.0], [10.1, 36.0], [10.1, 36.1], [10.0, 36.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"name": "No Geometry"},
                    "geometry": null
                },
                {
                    "type": "Feature",
                    "properties": {"name": "Bardo Museum"},
                    "geometry": {"type": "Point", "coordinates": [10.1346, 36.8094]}
                }
            ]
        }"#;

        let pois = GeoDataService::parse_collection(json, PoiCollection::Museums).unwrap();
        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].name.as_deref(), Some("Bardo Museum"));
    }

    #[test]
    fn test_parse_collection_rejects_non_collection() {
        let json = r#"{"type": "Point", "coordinates": [10.0, 36.0]}"#;
        let result = GeoDataService::parse_collection(json, PoiCollection::Hotels);
        assert!(matches!(result, Err(GeoDataError::NotACollection)));
    }

    #[test]
    fn test_parse_collection_rejects_malformed_json() {
        let result = GeoDataService::parse_collection("not geojson", PoiCollection::Hotels);
        assert!(matches!(result, Err(GeoDataError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_degrades_to_empty_on_missing_dir() {
        let source = DataSource::Dir(PathBuf::from("/nonexistent/geodata"));
        let service = GeoDataService::load(&source).await;

        assert!(service.hotels().is_empty());
        assert!(service.museums().is_empty());
        assert!(service.attractions().is_empty());
        assert!(service.restaurants().is_empty());
        assert!(service.cafes().is_empty());
    }

    #[test]
    fn test_hotel_by_id() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "node/7",
                    "properties": {"name": "Hotel Majestic"},
                    "geometry": {"type": "Point", "coordinates": [10.18, 36.80]}
                }
            ]
        }"#;
        let hotels = GeoDataService::parse_collection(json, PoiCollection::Hotels).unwrap();
        let service = GeoDataService::from_collections(hotels, vec![], vec![], vec![], vec![]);

        assert!(service.hotel_by_id("node/7").is_some());
        assert!(service.hotel_by_id("node/8").is_none());
    }
}
