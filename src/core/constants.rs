// Player starting values
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_ATTACK_POWER: i64 = 500;
/// Required EXP for the first level-up, as a power of ten (1e6).
pub const STARTING_REQUIRED_EXP_EXPONENT: i64 = 6;

// Fishing rods
/// Critical damage multiplier of a brand new rod, in tenths (1.5x).
pub const ROD_BASE_CRIT_DAMAGE_TENTHS: i64 = 15;
/// Critical damage added per level on level-up, in tenths (0.1 x new level).
pub const ROD_CRIT_DAMAGE_PER_LEVEL_TENTHS: i64 = 1;

// Combat
/// Chance that an attack with a rod equipped is a critical hit.
pub const CRIT_CHANCE: f64 = 0.3;

// Menu tokens
pub const AFFIRMATIVE_TOKEN: &str = "Y";
pub const ATTACK_TOKEN: &str = "ATTACK";

// Persistence
pub const SAVE_VERSION_MAGIC: u64 = 0x4659_5348_5459_4331; // "FYSHTYC1"
pub const SAVE_VERSION: u32 = 1;
pub const SAVE_FILE_NAME: &str = "fishing_tycoon.sav";
pub const SAVE_DIR_NAME: &str = "fishing-tycoon";

// Environment overrides
pub const ENV_SAVE_PATH: &str = "FISHING_TYCOON_SAVE";
pub const ENV_OFFLINE_PROGRESS: &str = "FISHING_TYCOON_OFFLINE";
pub const DEFAULT_LOG_FILTER: &str = "warn";
