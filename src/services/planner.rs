// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Trip-planning orchestration: proximity search with caching, the
//! special-region short-circuit, and day-plan assembly.

use std::sync::Arc;

use dashmap::DashMap;

use crate::models::{DayPlan, NearbyPois, Poi, RegionContent, TripType};
use crate::services::geodata::GeoDataService;
use crate::services::itinerary::build_daily_plans;
use crate::services::nearby::SearchRadii;
use crate::services::region::{detect_region, RegionCatalog};

/// Shared cache of per-hotel proximity results.
pub type NearbyCache = Arc<DashMap<String, Arc<NearbyPois>>>;

/// The outcome of planning a trip.
#[derive(Debug, Clone)]
pub enum TripPlan {
    /// Generated day plans for a regular hotel.
    Days(Vec<DayPlan>),
    /// Curated partner content for a special-region hotel; no day plans
    /// are generated.
    SpecialRegion(RegionContent),
}

/// Stateless planning logic plus the per-hotel proximity cache.
#[derive(Clone)]
pub struct PlannerService {
    radii: SearchRadii,
    /// Proximity results by hotel id. Valid for the process lifetime
    /// because the loaded collections never change.
    nearby_cache: NearbyCache,
}

impl PlannerService {
    pub fn new(radii: SearchRadii) -> Self {
        Self {
            radii,
            nearby_cache: Arc::new(DashMap::new()),
        }
    }

    /// Nearby POIs for a hotel, computed once and memoized by hotel id.
    pub fn nearby_for(&self, hotel: &Poi, data: &GeoDataService) -> Arc<NearbyPois> {
        if let Some(cached) = self.nearby_cache.get(&hotel.id) {
            return cached.clone();
        }

        tracing::debug!(hotel_id = %hotel.id, "Computing nearby POIs");
        let computed = Arc::new(NearbyPois::around(hotel, data, &self.radii));
        self.nearby_cache
            .entry(hotel.id.clone())
            .or_insert(computed)
            .clone()
    }

    /// Plan a trip for a hotel.
    ///
    /// Hotels in a special region get the curated content block and no
    /// generated schedule; everything else gets `days` day plans.
    pub fn plan_trip(
        &self,
        hotel: &Poi,
        days: u32,
        trip_type: TripType,
        data: &GeoDataService,
        regions: &RegionCatalog,
    ) -> TripPlan {
        if let Some(region) = detect_region(hotel) {
            tracing::info!(
                hotel_id = %hotel.id,
                region = region.as_str(),
                "Special region hotel, serving curated content"
            );
            return TripPlan::SpecialRegion(*regions.content_for(region));
        }

        let nearby = self.nearby_for(hotel, data);
        TripPlan::Days(build_daily_plans(hotel, days, trip_type, &nearby))
    }
}
