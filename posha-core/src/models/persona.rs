use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse style archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PersonaType {
    Explorer,
    Creative,
    Minimalist,
    Active,
    Balanced,
}

impl PersonaType {
    pub fn description(self) -> &'static str {
        match self {
            PersonaType::Explorer => "Just starting to discover your style patterns",
            PersonaType::Creative => "You love color variety and bold expressions",
            PersonaType::Minimalist => "You prefer timeless, understated elegance",
            PersonaType::Active => "Comfort and movement guide your choices",
            PersonaType::Balanced => "You blend different styles with ease",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaType::Explorer => "Explorer",
            PersonaType::Creative => "Creative",
            PersonaType::Minimalist => "Minimalist",
            PersonaType::Active => "Active",
            PersonaType::Balanced => "Balanced",
        }
    }
}

impl std::fmt::Display for PersonaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persona label plus its user-facing description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Persona {
    #[serde(rename = "type")]
    pub persona_type: PersonaType,
    pub description: String,
}

impl From<PersonaType> for Persona {
    fn from(persona_type: PersonaType) -> Self {
        Self {
            persona_type,
            description: persona_type.description().to_string(),
        }
    }
}
