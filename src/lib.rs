// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Tunisia Travel Magic: trip planning for Tunisian hotel stays
//!
//! This crate provides the backend API for browsing hotels and generating
//! deterministic multi-day itineraries from nearby points of interest.

pub mod config;
pub mod error;
pub mod keywords;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{GeoDataService, PlannerService, RegionCatalog};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub geodata: GeoDataService,
    pub planner: PlannerService,
    pub regions: RegionCatalog,
}
