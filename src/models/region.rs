// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Special-region model: regions with curated partner content.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A region whose hotels get curated partner content instead of generated
/// day plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SpecialRegion {
    Zaghouan,
    Beja,
    Jendouba,
}

impl SpecialRegion {
    /// All special regions, in detection order.
    pub const ALL: [SpecialRegion; 3] = [
        SpecialRegion::Zaghouan,
        SpecialRegion::Beja,
        SpecialRegion::Jendouba,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialRegion::Zaghouan => "zaghouan",
            SpecialRegion::Beja => "beja",
            SpecialRegion::Jendouba => "jendouba",
        }
    }
}

/// Curated content block for one special region.
#[derive(Debug, Clone, Copy)]
pub struct RegionContent {
    pub region: SpecialRegion,
    pub title: &'static str,
    pub description: &'static str,
    /// Suggested activities, shown in catalog order.
    pub activities: &'static [&'static str],
    /// Partner site for booking regional experiences.
    pub link: &'static str,
}
