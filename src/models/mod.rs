// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Data models for the application.

pub mod itinerary;
pub mod poi;
pub mod region;

pub use itinerary::{Activity, ActivityType, DayPlan, MapMarker, TripType};
pub use poi::{CategorizedAttractions, NearbyPois, Poi, PoiCollection};
pub use region::{RegionContent, SpecialRegion};
