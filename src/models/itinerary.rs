// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Itinerary model: scheduled activities, day plans, and map markers.

use chrono::NaiveTime;
use geo::Point;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Poi;

/// What kind of stop a scheduled activity (or its map marker) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    Hotel,
    Museum,
    Attraction,
    Restaurant,
    Cafe,
    Beach,
    Park,
    Shopping,
    Historical,
}

/// Who the trip is for. Shapes a handful of schedule slots (couples get a
/// sunset stop when a viewpoint is in range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TripType {
    Couple,
    Family,
    Solo,
    Friends,
}

/// One scheduled stop in a day plan.
#[derive(Debug, Clone)]
pub struct Activity {
    /// Slot time within the day.
    pub time: NaiveTime,
    /// Display title (e.g. "Lunch at Dar El Jeld").
    pub title: String,
    pub activity_type: ActivityType,
    /// Short flavor text for the slot.
    pub description: String,
    /// How to get there (e.g. "10min walk"), absent for the hotel breakfast.
    pub transport: Option<String>,
    /// The POI the slot visits, absent for hotel-based slots.
    pub poi: Option<Poi>,
}

/// A marker to place on the trip map.
#[derive(Debug, Clone)]
pub struct MapMarker {
    /// Display name of the marked place.
    pub name: String,
    pub location: Point<f64>,
    pub marker_type: ActivityType,
}

/// A full day's schedule plus its map markers.
#[derive(Debug, Clone)]
pub struct DayPlan {
    /// Day number, 1-based.
    pub day: u32,
    pub activities: Vec<Activity>,
    /// Hotel marker first, then one marker per activity that visits a POI.
    pub markers: Vec<MapMarker>,
}
