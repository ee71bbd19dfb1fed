//! Persona classification as an ordered rule table.
//!
//! Rules are evaluated top to bottom; the first predicate that holds picks the
//! persona. When none match the user is `Balanced`.

use posha_core::constants::preference_tags::{ATHLEISURE, BOLD_PATTERNS, MODEST, NEUTRAL_TONES};
use posha_core::constants::{CREATIVE_DISTINCT_COLOR_THRESHOLD, EXPLORER_OUTFIT_THRESHOLD};
use posha_core::models::{OutfitRecord, Persona, PersonaType};

use crate::frequency::color_frequency;

/// Facts the rules look at, computed once per classification.
#[derive(Debug, Clone, Copy)]
pub struct PersonaInputs<'a> {
    pub outfit_count: usize,
    /// Entries in the (top-five) color ranking.
    pub distinct_colors: usize,
    pub preferences: &'a [String],
}

impl<'a> PersonaInputs<'a> {
    pub fn new(records: &[OutfitRecord], preferences: &'a [String]) -> Self {
        Self {
            outfit_count: records.len(),
            distinct_colors: color_frequency(records).len(),
            preferences,
        }
    }

    pub fn prefers(&self, tag: &str) -> bool {
        self.preferences.iter().any(|p| p == tag)
    }
}

/// One row of the rule table.
pub struct PersonaRule {
    pub persona: PersonaType,
    pub applies: fn(&PersonaInputs<'_>) -> bool,
}

pub const PERSONA_RULES: &[PersonaRule] = &[
    PersonaRule {
        persona: PersonaType::Explorer,
        applies: |i| i.outfit_count < EXPLORER_OUTFIT_THRESHOLD,
    },
    PersonaRule {
        persona: PersonaType::Creative,
        applies: |i| {
            i.prefers(BOLD_PATTERNS) && i.distinct_colors > CREATIVE_DISTINCT_COLOR_THRESHOLD
        },
    },
    PersonaRule {
        persona: PersonaType::Minimalist,
        applies: |i| i.prefers(NEUTRAL_TONES) || i.prefers(MODEST),
    },
    PersonaRule {
        persona: PersonaType::Active,
        applies: |i| i.prefers(ATHLEISURE),
    },
];

/// First matching persona from [`PERSONA_RULES`], else `Balanced`.
pub fn classify_persona(records: &[OutfitRecord], preferences: &[String]) -> Persona {
    let inputs = PersonaInputs::new(records, preferences);
    PERSONA_RULES
        .iter()
        .find(|rule| (rule.applies)(&inputs))
        .map_or(PersonaType::Balanced, |rule| rule.persona)
        .into()
}
