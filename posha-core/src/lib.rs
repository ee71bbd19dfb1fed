//! # posha-core
//!
//! Foundation crate for the Posha wardrobe system.
//! Defines the domain models, persistence traits, errors, config, tracing
//! setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::PoshaConfig;
pub use errors::{PoshaError, PoshaResult};
pub use models::{ClosetItem, NewOutfit, OutfitRecord, Persona, PersonaType};
