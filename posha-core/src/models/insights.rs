use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{OutfitRecord, Persona, TagTally};

/// One row of a frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrequencyEntry {
    pub name: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Last-week activity plus all-time color and occasion trends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklySummary {
    /// Outfits logged inside the window.
    pub count: usize,
    /// Top colors across the full history, not just the window.
    pub top_colors: Vec<FrequencyEntry>,
    /// Most frequent occasion across the full history, or "Not tracked".
    pub top_occasion: String,
    pub outfits_in_window: Vec<OutfitRecord>,
}

/// What the dominant fabric says about the wearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FabricInsight {
    pub top_fabric: String,
    pub tendency: String,
}

/// Closet composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClosetSummary {
    pub total_items: usize,
    /// Items normalized from bare-name entries.
    pub legacy_items: usize,
    #[ts(type = "Record<string, number>")]
    pub by_category: TagTally,
    /// Distinct fabrics in first-seen order.
    pub fabrics: Vec<String>,
}

/// Everything the insights page shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsightsReport {
    pub top_colors: Vec<FrequencyEntry>,
    pub fabrics: Vec<FrequencyEntry>,
    pub fabric_insight: Option<FabricInsight>,
    #[ts(type = "Record<string, number>")]
    pub occasions: TagTally,
    #[ts(type = "Record<string, number>")]
    pub weather: TagTally,
    pub weekly: WeeklySummary,
    pub persona: Persona,
    pub closet: ClosetSummary,
}
