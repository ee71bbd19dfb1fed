//! Domain models shared by the analytics and storage crates.

pub mod closet;
pub mod insights;
pub mod outfit;
pub mod persona;
pub mod tag_tally;

pub use closet::{ClosetItem, ClosetItemUpdate, NewClosetItem, StoredClosetEntry, StructuredItem};
pub use insights::{
    ClosetSummary, FabricInsight, FrequencyEntry, InsightsReport, WeeklySummary,
};
pub use outfit::{NewOutfit, OutfitRecord, UNKNOWN_TIMESTAMP};
pub use persona::{Persona, PersonaType};
pub use tag_tally::TagTally;
