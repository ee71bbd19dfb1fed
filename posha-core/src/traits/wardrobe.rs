use chrono::{DateTime, Utc};

use crate::errors::PoshaResult;
use crate::models::{ClosetItem, ClosetItemUpdate, NewClosetItem, NewOutfit, OutfitRecord};

/// Outfits, closet, preferences, and skin tone for one user.
pub trait IWardrobeStore: Send + Sync {
    // --- Outfits ---
    /// All logged outfits, newest first.
    fn outfits(&self) -> PoshaResult<Vec<OutfitRecord>>;
    fn log_outfit(&self, outfit: NewOutfit) -> PoshaResult<OutfitRecord> {
        self.log_outfit_at(outfit, Utc::now())
    }
    fn log_outfit_at(&self, outfit: NewOutfit, at: DateTime<Utc>) -> PoshaResult<OutfitRecord>;

    // --- Closet ---
    fn closet(&self) -> PoshaResult<Vec<ClosetItem>>;
    /// Quick-add by name. Returns false for a blank or duplicate name.
    fn add_closet_item(&self, name: &str) -> PoshaResult<bool>;
    fn add_closet_item_with_details(&self, item: NewClosetItem) -> PoshaResult<ClosetItem>;
    /// Returns whether an item with `id` was removed.
    fn remove_closet_item(&self, id: &str) -> PoshaResult<bool>;
    fn update_closet_item(&self, id: &str, update: &ClosetItemUpdate) -> PoshaResult<ClosetItem>;

    // --- Preferences ---
    fn preferences(&self) -> PoshaResult<Vec<String>>;
    fn set_preferences(&self, preferences: Vec<String>) -> PoshaResult<()>;
    /// Flip a preference tag. Returns true when the tag is now enabled.
    fn toggle_preference(&self, tag: &str) -> PoshaResult<bool>;

    // --- Profile ---
    fn skin_tone(&self) -> PoshaResult<String>;
    fn set_skin_tone(&self, tone: &str) -> PoshaResult<()>;
}
