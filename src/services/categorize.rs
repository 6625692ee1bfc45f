// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Keyword bucketing of attractions and activity-type classification.

use crate::keywords::{contains_any, KeywordClassifier};
use crate::models::{ActivityType, CategorizedAttractions, Poi};

const BEACH_KEYWORDS: &[&str] = &["beach", "plage"];
const PARK_KEYWORDS: &[&str] = &["park", "garden", "jardin"];
const HISTORICAL_KEYWORDS: &[&str] = &["ruin", "ancient", "historical", "monument"];
const VIEWPOINT_KEYWORDS: &[&str] = &["view", "panoramic", "sunset"];

/// Keywords that keep an attraction out of `other`. Narrower than the union
/// of the themed lists: `plage`, `jardin`, `monument`, and `sunset` do not
/// exclude, so a point can sit in a themed bucket and in `other` at once.
const OTHER_EXCLUSION_KEYWORDS: &[&str] = &[
    "beach",
    "park",
    "garden",
    "ruin",
    "ancient",
    "historical",
    "view",
    "panoramic",
];

/// Name rules for [`activity_type_for`], in precedence order.
const ACTIVITY_TYPE_RULES: KeywordClassifier<ActivityType> = KeywordClassifier::new(&[
    (BEACH_KEYWORDS, ActivityType::Beach),
    (PARK_KEYWORDS, ActivityType::Park),
    (&["museum"], ActivityType::Museum),
    (&["restaurant", "cafe", "coffee"], ActivityType::Restaurant),
    (&["shopping", "market", "mall"], ActivityType::Shopping),
    (&["ruin", "ancient", "historical"], ActivityType::Historical),
]);

impl CategorizedAttractions {
    /// Bucket attractions by case-insensitive name keywords.
    ///
    /// Buckets are not exclusive and input order is preserved within each.
    /// Unnamed attractions match no themed bucket and fall through to
    /// `other`.
    pub fn from_attractions(attractions: &[Poi]) -> Self {
        let mut result = Self::default();

        for poi in attractions {
            let name = poi.name.as_deref().unwrap_or("");

            if contains_any(name, BEACH_KEYWORDS) {
                result.beaches.push(poi.clone());
            }
            if contains_any(name, PARK_KEYWORDS) {
                result.parks.push(poi.clone());
            }
            if contains_any(name, HISTORICAL_KEYWORDS) {
                result.historical.push(poi.clone());
            }
            if contains_any(name, VIEWPOINT_KEYWORDS) {
                result.viewpoints.push(poi.clone());
            }
            if !contains_any(name, OTHER_EXCLUSION_KEYWORDS) {
                result.other.push(poi.clone());
            }
        }

        result
    }
}

/// Classify a POI into the activity type its name suggests.
///
/// First matching rule wins ("Beach Park" is a beach); names matching no
/// rule default to [`ActivityType::Attraction`].
pub fn activity_type_for(poi: &Poi) -> ActivityType {
    ACTIVITY_TYPE_RULES
        .classify(poi.name.as_deref().unwrap_or(""))
        .unwrap_or(ActivityType::Attraction)
}
