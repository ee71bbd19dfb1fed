// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "posha.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Profile ---
pub const DEFAULT_PREFERENCES: &[&str] = &["Minimalist", "Sustainable"];
pub const DEFAULT_SKIN_TONE: &str = "Medium";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
