/// Length of the weekly summary window, in days.
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Number of entries kept by the color ranking.
pub const TOP_COLORS_LIMIT: usize = 5;

/// Below this many logged outfits every user is an Explorer.
pub const EXPLORER_OUTFIT_THRESHOLD: usize = 5;

/// A Creative persona needs strictly more distinct top colors than this.
pub const CREATIVE_DISTINCT_COLOR_THRESHOLD: usize = 3;

/// Reported as the top occasion when no outfit carries an occasion tag.
pub const UNTRACKED_OCCASION: &str = "Not tracked";

/// Prefix for ids synthesized for legacy (name-only) closet entries.
pub const LEGACY_ITEM_ID_PREFIX: &str = "legacy:";

/// Prefix for ids synthesized for structured closet entries stored without one.
pub const UNIDENTIFIED_ITEM_ID_PREFIX: &str = "unidentified:";

/// Preference tags the persona rules look for.
pub mod preference_tags {
    pub const BOLD_PATTERNS: &str = "Bold patterns";
    pub const NEUTRAL_TONES: &str = "Neutral tones";
    pub const MODEST: &str = "Modest";
    pub const ATHLEISURE: &str = "Athleisure";
}

/// Keys under which the wardrobe store persists its collections.
pub mod storage_keys {
    pub const CLOSET: &str = "poshaCloset";
    pub const OUTFITS: &str = "poshaOutfits";
    pub const PREFERENCES: &str = "poshaPreferences";
    pub const SKIN_TONE: &str = "poshaSkinTone";

    /// Where a value that is not a JSON list is copied before its key is
    /// rewritten.
    pub fn unreadable_backup(key: &str) -> String {
        format!("{key}:unreadable")
    }
}
