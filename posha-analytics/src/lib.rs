//! # posha-analytics
//!
//! Pure, side-effect-free summaries over logged outfits. Callers pass a
//! snapshot of records (and preference tags where needed) and get owned
//! results back; nothing here performs I/O or returns an error.
//!
//! [`AnalyticsEngine`] is the one exception to "no I/O": it loads a snapshot
//! from an [`IWardrobeStore`](posha_core::traits::IWardrobeStore) and runs
//! every function over it.

pub mod closet;
pub mod engine;
pub mod fabric;
pub mod frequency;
pub mod persona;
pub mod weekly;

pub use closet::closet_summary;
pub use engine::AnalyticsEngine;
pub use fabric::fabric_insight;
pub use frequency::{
    color_frequency, fabric_frequency, has_pattern_data, occasion_patterns, weather_patterns,
};
pub use persona::{classify_persona, PersonaInputs, PersonaRule, PERSONA_RULES};
pub use weekly::weekly_summary;
