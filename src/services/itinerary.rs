// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Deterministic day-by-day itinerary assembly.
//!
//! Each day gets one template (arrival, departure, or full exploration) plus
//! a set of shared slots. Repeated slots rotate through their candidate list
//! by day number, so the same inputs always produce the same schedule.

use chrono::NaiveTime;

use crate::models::{
    Activity, ActivityType, CategorizedAttractions, DayPlan, MapMarker, NearbyPois, Poi, TripType,
};
use crate::services::categorize::activity_type_for;

/// How a single day is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayKind {
    Arrival,
    Departure,
    Full,
}

/// Arrival wins over departure, so a one-day trip is an arrival day.
fn day_kind(day: u32, days: u32) -> DayKind {
    if day == 1 {
        DayKind::Arrival
    } else if day == days {
        DayKind::Departure
    } else {
        DayKind::Full
    }
}

/// Build the full set of day plans for a trip.
///
/// `days >= 1` is enforced at the API boundary. The result has exactly
/// `days` entries numbered `1..=days`, each with its map markers.
pub fn build_daily_plans(
    hotel: &Poi,
    days: u32,
    trip_type: TripType,
    nearby: &NearbyPois,
) -> Vec<DayPlan> {
    debug_assert!(days >= 1, "days must be at least 1");

    let categorized = CategorizedAttractions::from_attractions(&nearby.attractions);

    (1..=days)
        .map(|day| {
            let activities = build_day(day, days, trip_type, nearby, &categorized);
            let markers = day_markers(hotel, &activities);
            DayPlan {
                day,
                activities,
                markers,
            }
        })
        .collect()
}

/// Map markers for one day: the hotel first, then every activity that visits
/// a POI, in activity order, tagged with the activity's type.
pub fn day_markers(hotel: &Poi, activities: &[Activity]) -> Vec<MapMarker> {
    let mut markers = vec![MapMarker {
        name: hotel.display_name().to_string(),
        location: hotel.location,
        marker_type: ActivityType::Hotel,
    }];

    markers.extend(activities.iter().filter_map(|activity| {
        activity.poi.as_ref().map(|poi| MapMarker {
            name: poi.display_name().to_string(),
            location: poi.location,
            marker_type: activity.activity_type,
        })
    }));

    markers
}

/// Schedule one day. Slots are appended in clock order, so omitting a slot
/// never reorders the rest.
fn build_day(
    day: u32,
    days: u32,
    trip_type: TripType,
    nearby: &NearbyPois,
    categorized: &CategorizedAttractions,
) -> Vec<Activity> {
    let mut activities = Vec::new();

    match day_kind(day, days) {
        DayKind::Arrival => {
            activities.push(hotel_slot(
                slot(8, 0),
                "Wake up & Hotel Breakfast",
                "Start your day with a delicious breakfast at your hotel",
            ));
            if let Some(museum) = nearby.museums.first() {
                activities.push(poi_slot(
                    slot(10, 0),
                    format!("Visit {}", museum.display_name()),
                    ActivityType::Museum,
                    "Explore local culture and history",
                    "15min taxi ride",
                    museum,
                ));
            }
        }
        DayKind::Departure => {
            activities.push(hotel_slot(
                slot(9, 0),
                "Leisurely Breakfast",
                "Enjoy a relaxed morning",
            ));
            if let Some(beach) = categorized.beaches.first() {
                activities.push(poi_slot(
                    slot(11, 0),
                    format!("Relax at {}", beach.display_name()),
                    ActivityType::Beach,
                    "Enjoy the sun and sea",
                    "10min taxi ride",
                    beach,
                ));
            }
        }
        DayKind::Full => {
            activities.push(hotel_slot(
                slot(7, 30),
                "Early Breakfast",
                "Fuel up for a day of exploration",
            ));
            let morning = categorized
                .historical
                .first()
                .or_else(|| categorized.parks.first())
                .or_else(|| round_robin(&categorized.other, day));
            if let Some(poi) = morning {
                activities.push(poi_slot(
                    slot(9, 0),
                    format!("Explore {}", poi.display_name()),
                    activity_type_for(poi),
                    "Discover local attractions",
                    "20min taxi ride",
                    poi,
                ));
            }
        }
    }

    if let Some(restaurant) = round_robin(&nearby.restaurants, day) {
        activities.push(poi_slot(
            slot(13, 0),
            format!("Lunch at {}", restaurant.display_name()),
            ActivityType::Restaurant,
            "Taste local cuisine",
            "10min walk",
            restaurant,
        ));
    }

    // The last day winds down early: no afternoon stop, no coffee break.
    if day != days {
        let afternoon = categorized
            .beaches
            .first()
            .or_else(|| categorized.viewpoints.first())
            .or_else(|| round_robin(&categorized.other, day + 1));
        if let Some(poi) = afternoon {
            activities.push(poi_slot(
                slot(15, 0),
                format!("Visit {}", poi.display_name()),
                activity_type_for(poi),
                "Continue your exploration",
                "15min taxi ride",
                poi,
            ));
        }

        if let Some(cafe) = round_robin(&nearby.cafes, day) {
            activities.push(poi_slot(
                slot(17, 0),
                format!("Coffee break at {}", cafe.display_name()),
                ActivityType::Cafe,
                "Relax with local coffee or tea",
                "5min walk",
                cafe,
            ));
        }
    }

    // Dinner requires a second restaurant; with exactly two, the rotation
    // can serve dinner at the lunch spot.
    if nearby.restaurants.len() > 1 {
        let dinner = &nearby.restaurants[(day as usize + 1) % nearby.restaurants.len()];
        activities.push(poi_slot(
            slot(19, 30),
            format!("Dinner at {}", dinner.display_name()),
            ActivityType::Restaurant,
            "Evening dining experience",
            "10min taxi ride",
            dinner,
        ));
    }

    if trip_type == TripType::Couple {
        if let Some(viewpoint) = categorized.viewpoints.first() {
            activities.push(poi_slot(
                slot(21, 0),
                format!("Sunset at {}", viewpoint.display_name()),
                ActivityType::Attraction,
                "Romantic evening views",
                "15min taxi ride",
                viewpoint,
            ));
        }
    }

    activities
}

/// Pick from `pois` by rotating index, `None` when the list is empty.
fn round_robin(pois: &[Poi], index: u32) -> Option<&Poi> {
    if pois.is_empty() {
        None
    } else {
        Some(&pois[index as usize % pois.len()])
    }
}

fn slot(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("slot times are valid clock times")
}

fn hotel_slot(time: NaiveTime, title: &str, description: &str) -> Activity {
    Activity {
        time,
        title: title.to_string(),
        activity_type: ActivityType::Hotel,
        description: description.to_string(),
        transport: None,
        poi: None,
    }
}

fn poi_slot(
    time: NaiveTime,
    title: String,
    activity_type: ActivityType,
    description: &str,
    transport: &str,
    poi: &Poi,
) -> Activity {
    Activity {
        time,
        title,
        activity_type,
        description: description.to_string(),
        transport: Some(transport.to_string()),
        poi: Some(poi.clone()),
    }
}
