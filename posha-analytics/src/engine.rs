//! AnalyticsEngine: loads a wardrobe snapshot and assembles the insights report.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use posha_core::errors::PoshaResult;
use posha_core::insights_span;
use posha_core::models::{InsightsReport, OutfitRecord, Persona, WeeklySummary};
use posha_core::traits::IWardrobeStore;

use crate::{
    classify_persona, closet_summary, color_frequency, fabric_frequency, fabric_insight,
    occasion_patterns, weather_patterns, weekly_summary,
};

/// Reads from an [`IWardrobeStore`] and runs the pure analytics over it.
///
/// Each call takes a fresh snapshot; nothing is cached between calls.
pub struct AnalyticsEngine {
    store: Arc<dyn IWardrobeStore>,
}

impl AnalyticsEngine {
    pub fn new(store: Arc<dyn IWardrobeStore>) -> Self {
        Self { store }
    }

    /// The full insights report as of `now`.
    pub fn insights(&self, now: DateTime<Utc>) -> PoshaResult<InsightsReport> {
        let outfits = self.store.outfits()?;
        let preferences = self.store.preferences()?;
        let closet = self.store.closet()?;

        let span = insights_span!(outfits.len());
        let _guard = span.enter();

        let fabrics = fabric_frequency(&outfits);
        let report = InsightsReport {
            top_colors: color_frequency(&outfits),
            fabric_insight: fabric_insight(&fabrics),
            fabrics,
            occasions: occasion_patterns(&outfits),
            weather: weather_patterns(&outfits),
            weekly: weekly_summary(&outfits, now),
            persona: classify_persona(&outfits, &preferences),
            closet: closet_summary(&closet),
        };

        info!(
            outfits = outfits.len(),
            closet_items = report.closet.total_items,
            persona = %report.persona.persona_type,
            weekly_count = report.weekly.count,
            "insights computed"
        );
        Ok(report)
    }

    /// Weekly summary only.
    pub fn weekly(&self, now: DateTime<Utc>) -> PoshaResult<WeeklySummary> {
        let outfits = self.store.outfits()?;
        Ok(weekly_summary(&outfits, now))
    }

    /// Persona only.
    pub fn persona(&self) -> PoshaResult<Persona> {
        let outfits: Vec<OutfitRecord> = self.store.outfits()?;
        let preferences = self.store.preferences()?;
        let persona = classify_persona(&outfits, &preferences);
        debug!(persona = %persona.persona_type, outfits = outfits.len(), "persona classified");
        Ok(persona)
    }
}
