// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Services module - business logic layer.

pub mod categorize;
pub mod geodata;
pub mod itinerary;
pub mod nearby;
pub mod planner;
pub mod region;

pub use geodata::{DataSource, GeoDataService};
pub use nearby::SearchRadii;
pub use planner::{PlannerService, TripPlan};
pub use region::RegionCatalog;
