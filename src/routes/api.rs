// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! API routes: hotel browsing, city list, and itinerary generation.

use crate::error::{AppError, Result};
use crate::models::{
    Activity, ActivityType, DayPlan, MapMarker, Poi, RegionContent, SpecialRegion, TripType,
};
use crate::services::planner::TripPlan;
use crate::services::region::detect_region;
use crate::time_utils::{format_clock, format_utc_rfc3339};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_PER_PAGE: u32 = 100;
const MAX_TRIP_DAYS: u32 = 30;

/// Public API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/hotels", get(get_hotels))
        .route("/api/cities", get(get_cities))
        .route("/api/itinerary", post(generate_itinerary))
}

// ─── Shared Views ────────────────────────────────────────────

/// Hotel summary for listings and itinerary responses.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HotelSummary {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    /// Set when the hotel sits in a region served by local partners.
    pub special_region: Option<SpecialRegion>,
}

fn hotel_summary(hotel: &Poi) -> HotelSummary {
    HotelSummary {
        id: hotel.id.clone(),
        name: hotel
            .name
            .clone()
            .unwrap_or_else(|| "Unnamed Hotel".to_string()),
        city: hotel.city.clone(),
        longitude: hotel.location.x(),
        latitude: hotel.location.y(),
        special_region: detect_region(hotel),
    }
}

// ─── Hotels ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct HotelsQuery {
    /// Case-insensitive substring match on hotel name or city
    search: Option<String>,
    /// Exact city filter
    city: Option<String>,
    /// Sort key: "name" (default) or "city"
    sort: Option<String>,
    /// Pagination: page number (1-indexed)
    #[serde(default = "default_page")]
    page: u32,
    /// Pagination: items per page
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    50
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HotelsResponse {
    pub hotels: Vec<HotelSummary>,
    pub page: u32,
    pub per_page: u32,
    /// Total number of hotels matching the query.
    pub total: u32,
}

/// List hotels with optional search, city filter, sorting, and pagination.
async fn get_hotels(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HotelsQuery>,
) -> Result<Json<HotelsResponse>> {
    tracing::debug!(
        search = ?params.search,
        city = ?params.city,
        sort = ?params.sort,
        page = params.page,
        "Listing hotels"
    );

    if params.page < 1 {
        return Err(AppError::BadRequest(
            "Page must be greater than 0".to_string(),
        ));
    }
    let limit = params.per_page.min(MAX_PER_PAGE);

    let sort = params.sort.as_deref().unwrap_or("name");
    if sort != "name" && sort != "city" {
        return Err(AppError::BadRequest(
            "Sort must be 'name' or 'city'".to_string(),
        ));
    }

    let search = params.search.as_deref().map(str::to_lowercase);
    let city_filter = params.city.as_deref();

    let mut hotels: Vec<&Poi> = state
        .geodata
        .hotels()
        .iter()
        .filter(|hotel| {
            let city_ok = city_filter.is_none_or(|c| hotel.city.as_deref() == Some(c));
            let search_ok = search.as_deref().is_none_or(|needle| {
                let name = hotel.name.as_deref().unwrap_or("").to_lowercase();
                let city = hotel.city.as_deref().unwrap_or("").to_lowercase();
                name.contains(needle) || city.contains(needle)
            });
            city_ok && search_ok
        })
        .collect();

    // Missing names and cities sort first, like an empty string would.
    match sort {
        "city" => hotels.sort_by_key(|h| h.city.clone().unwrap_or_default().to_lowercase()),
        _ => hotels.sort_by_key(|h| h.name.clone().unwrap_or_default().to_lowercase()),
    }

    let total = hotels.len() as u32;

    // In-memory pagination; use checked multiplication to prevent overflow.
    let start = (params.page as usize - 1)
        .checked_mul(limit as usize)
        .ok_or_else(|| AppError::BadRequest("Page number causes overflow".to_string()))?;

    let paged: Vec<HotelSummary> = if start < hotels.len() {
        let end = start.saturating_add(limit as usize).min(hotels.len());
        hotels[start..end].iter().map(|h| hotel_summary(h)).collect()
    } else {
        vec![]
    };

    Ok(Json(HotelsResponse {
        hotels: paged,
        page: params.page,
        per_page: limit,
        total,
    }))
}

// ─── Cities ──────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// Sorted, de-duplicated city list from the hotels collection.
async fn get_cities(State(state): State<Arc<AppState>>) -> Json<CitiesResponse> {
    let mut cities: Vec<String> = state
        .geodata
        .hotels()
        .iter()
        .filter_map(|h| h.city.clone())
        .collect();
    cities.sort();
    cities.dedup();

    Json(CitiesResponse { cities })
}

// ─── Itinerary ───────────────────────────────────────────────

#[derive(Deserialize)]
struct ItineraryRequest {
    hotel_id: String,
    days: u32,
    trip_type: TripType,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ItineraryResponse {
    pub hotel: HotelSummary,
    pub days: u32,
    pub trip_type: TripType,
    /// Generation timestamp (RFC3339)
    pub generated_at: String,
    /// Curated content for special-region hotels; `day_plans` is empty
    /// exactly when this is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_region: Option<RegionContentView>,
    pub day_plans: Vec<DayPlanView>,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegionContentView {
    pub region: SpecialRegion,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
    pub link: String,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayPlanView {
    pub day: u32,
    pub activities: Vec<ActivityView>,
    pub markers: Vec<MarkerView>,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityView {
    /// Slot time as a 24-hour "HH:MM" string
    pub time: String,
    /// Display title, e.g. "Lunch at Dar El Jeld"
    pub activity: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi: Option<PoiView>,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PoiView {
    pub id: String,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MarkerView {
    pub name: String,
    #[serde(rename = "type")]
    pub marker_type: ActivityType,
    pub longitude: f64,
    pub latitude: f64,
}

fn region_view(content: &RegionContent) -> RegionContentView {
    RegionContentView {
        region: content.region,
        title: content.title.to_string(),
        description: content.description.to_string(),
        activities: content.activities.iter().map(|s| s.to_string()).collect(),
        link: content.link.to_string(),
    }
}

fn day_plan_view(plan: &DayPlan) -> DayPlanView {
    DayPlanView {
        day: plan.day,
        activities: plan.activities.iter().map(activity_view).collect(),
        markers: plan.markers.iter().map(marker_view).collect(),
    }
}

fn activity_view(activity: &Activity) -> ActivityView {
    ActivityView {
        time: format_clock(activity.time),
        activity: activity.title.clone(),
        activity_type: activity.activity_type,
        description: activity.description.clone(),
        transport: activity.transport.clone(),
        poi: activity.poi.as_ref().map(poi_view),
    }
}

fn poi_view(poi: &Poi) -> PoiView {
    PoiView {
        id: poi.id.clone(),
        name: poi.display_name().to_string(),
        longitude: poi.location.x(),
        latitude: poi.location.y(),
    }
}

fn marker_view(marker: &MapMarker) -> MarkerView {
    MarkerView {
        name: marker.name.clone(),
        marker_type: marker.marker_type,
        longitude: marker.location.x(),
        latitude: marker.location.y(),
    }
}

/// Generate a trip plan for a hotel.
async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>> {
    tracing::debug!(
        hotel_id = %req.hotel_id,
        days = req.days,
        trip_type = ?req.trip_type,
        "Generating itinerary"
    );

    if req.days < 1 || req.days > MAX_TRIP_DAYS {
        return Err(AppError::BadRequest(format!(
            "Days must be between 1 and {MAX_TRIP_DAYS}"
        )));
    }

    let hotel = state
        .geodata
        .hotel_by_id(&req.hotel_id)
        .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", req.hotel_id)))?;

    let plan = state
        .planner
        .plan_trip(hotel, req.days, req.trip_type, &state.geodata, &state.regions);

    let (special_region, day_plans) = match plan {
        TripPlan::SpecialRegion(content) => (Some(region_view(&content)), vec![]),
        TripPlan::Days(days) => (None, days.iter().map(day_plan_view).collect()),
    };

    Ok(Json(ItineraryResponse {
        hotel: hotel_summary(hotel),
        days: req.days,
        trip_type: req.trip_type,
        generated_at: format_utc_rfc3339(chrono::Utc::now()),
        special_region,
        day_plans,
    }))
}
