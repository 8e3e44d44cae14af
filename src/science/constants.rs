//! Nutrition science constants
//!
//! Reference values behind every score. These are published guideline
//! figures (WHO / USDA) and fixed product rules, not per-user settings.

// ============================================================================
// Energy balance
// ============================================================================

/// Energy stored in 1 kg of adipose tissue (kcal)
pub const CALORIES_PER_KG_FAT: f64 = 7700.0;

/// Horizon of the weight projection (days)
pub const PROJECTION_HORIZON_DAYS: f64 = 30.0;

/// Daily deficit/surplus band treated as logging noise (kcal)
pub const MAINTENANCE_BAND_KCAL: f64 = 200.0;

/// Weekly balance band treated as "balanced" (kcal)
pub const WEEKLY_BALANCE_BAND_KCAL: f64 = 1000.0;

/// Share of TDEE shown as basal metabolism in the educational split
pub const BMR_SHARE_OF_TDEE: f64 = 0.7;

/// `BMR_SHARE_OF_TDEE` as a display percentage
pub const BMR_PERCENT: u32 = 70;

// ============================================================================
// Daily limits and targets
// ============================================================================

/// Daily sodium limit (mg)
pub const SODIUM_LIMIT_MG: f64 = 2300.0;

/// Daily free sugar limit (g)
pub const SUGAR_LIMIT_G: f64 = 30.0;

/// Protein in one boiled egg (g), used for gap suggestions
pub const PROTEIN_PER_EGG_G: f64 = 6.0;

/// Share of TDEE assumed to come from protein when no target is set
pub const DEFAULT_PROTEIN_SHARE: f64 = 0.3;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

// ============================================================================
// Macro balance thresholds (percent of macro grams)
// ============================================================================

pub const MIN_PROTEIN_RATIO: f64 = 15.0;
pub const MAX_FAT_RATIO: f64 = 40.0;
pub const MAX_CARB_RATIO: f64 = 65.0;

// ============================================================================
// Health grade
// ============================================================================

/// Calorie quest passes from this fraction of TDEE...
pub const CALORIE_LOWER_FACTOR: f64 = 0.8;
/// ...up to this fraction
pub const CALORIE_UPPER_FACTOR: f64 = 1.1;

/// Protein quest passes at this fraction of the target
pub const PROTEIN_PASS_FACTOR: f64 = 0.8;

/// Sugar points lost per gram over the limit
pub const SUGAR_GRAMS_PER_POINT: f64 = 2.0;

/// Sodium points lost per this many mg over the limit
pub const SODIUM_MG_PER_POINT: f64 = 200.0;

/// Logged days per week needed for full consistency points
pub const FULL_CONSISTENCY_DAYS: u32 = 5;

pub const CALORIE_MAX_SCORE: u32 = 40;
pub const PROTEIN_MAX_SCORE: u32 = 15;
pub const SUGAR_MAX_SCORE: u32 = 15;
pub const SODIUM_MAX_SCORE: u32 = 10;
pub const CONSISTENCY_MAX_SCORE: u32 = 20;

// ============================================================================
// Consistency score weights
// ============================================================================

pub const LOG_RATE_WEIGHT: f64 = 0.4;
pub const ADHERENCE_WEIGHT: f64 = 0.6;

// ============================================================================
// Water
// ============================================================================

/// Minimum daily water goal (glasses)
pub const MIN_WATER_GLASSES: u32 = 8;

/// Volume of one glass (ml)
pub const ML_PER_GLASS: u32 = 250;
