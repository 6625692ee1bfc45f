// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Special-region detection and the curated content catalog.
//!
//! Hotels in a handful of inland regions are served by local partners with
//! hand-written suggestions instead of a generated schedule. Detection is a
//! bilingual keyword match on the hotel's city and name, so both Latin and
//! Arabic listings are caught.

use crate::keywords::contains_any;
use crate::models::{Poi, RegionContent, SpecialRegion};

const ZAGHOUAN_KEYWORDS: &[&str] = &["zaghouan", "زغوان"];
const BEJA_KEYWORDS: &[&str] = &["beja", "béja", "باجة"];
const JENDOUBA_KEYWORDS: &[&str] = &["jendouba", "جندوبة"];

fn keywords_for(region: SpecialRegion) -> &'static [&'static str] {
    match region {
        SpecialRegion::Zaghouan => ZAGHOUAN_KEYWORDS,
        SpecialRegion::Beja => BEJA_KEYWORDS,
        SpecialRegion::Jendouba => JENDOUBA_KEYWORDS,
    }
}

/// Detect whether a hotel sits in one of the special regions.
///
/// City and name are both checked, case-insensitively; regions are tried in
/// [`SpecialRegion::ALL`] order and the first match wins.
pub fn detect_region(hotel: &Poi) -> Option<SpecialRegion> {
    let city = hotel.city.as_deref().unwrap_or("");
    let name = hotel.name.as_deref().unwrap_or("");

    SpecialRegion::ALL.into_iter().find(|&region| {
        let keywords = keywords_for(region);
        contains_any(city, keywords) || contains_any(name, keywords)
    })
}

/// True when the hotel belongs to a special region.
pub fn is_special_region(hotel: &Poi) -> bool {
    detect_region(hotel).is_some()
}

/// Immutable catalog of the curated region content blocks.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    entries: [RegionContent; 3],
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self {
            entries: [
                RegionContent {
                    region: SpecialRegion::Zaghouan,
                    title: "⛰️💧 Zaghouan Region (زغوان)",
                    description: "Discover the beautiful mountains, waterfalls, and Roman \
                                  aqueducts of Zaghouan",
                    activities: &[
                        "Visit the Temple of Waters",
                        "Explore Roman aqueduct ruins",
                        "Hiking in Jebel Zaghouan",
                        "Visit traditional pottery workshops",
                        "Enjoy local mountain cuisine",
                    ],
                    link: "https://zaghouan-region-experts.com",
                },
                RegionContent {
                    region: SpecialRegion::Beja,
                    title: "🌾🏺 Beja Region (باجة)",
                    description: "Agricultural heartland with rich history and traditional \
                                  villages",
                    activities: &[
                        "Visit Dougga Roman ruins",
                        "Explore traditional olive farms",
                        "Local wine tasting",
                        "Mountain viewpoints",
                        "Cultural heritage sites",
                    ],
                    link: "https://beja-region-experts.com",
                },
                RegionContent {
                    region: SpecialRegion::Jendouba,
                    title: "🌳🏛️ Jendouba Region (جندوبة)",
                    description: "Gateway to the northwest with diverse landscapes and \
                                  archaeological sites",
                    activities: &[
                        "Visit Bulla Regia underground city",
                        "Explore Ain Draham forests",
                        "Traditional cooking classes",
                        "Local market experiences",
                        "Nature walks and bird watching",
                    ],
                    link: "https://jendouba-region-experts.com",
                },
            ],
        }
    }

    /// Content block for a detected region.
    pub fn content_for(&self, region: SpecialRegion) -> &RegionContent {
        let index = match region {
            SpecialRegion::Zaghouan => 0,
            SpecialRegion::Beja => 1,
            SpecialRegion::Jendouba => 2,
        };
        &self.entries[index]
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
