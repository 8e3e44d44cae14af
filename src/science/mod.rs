//! Nutrition scoring and projection engine
//!
//! Pure functions over plain numbers. Nothing here performs I/O or keeps
//! state; every call builds fresh result records.

pub mod constants;
pub mod consistency;
pub mod food_score;
pub mod grade;
pub mod macros;
pub mod projection;
pub mod tips;

pub use consistency::calculate_consistency_score;
pub use food_score::{calculate_food_health_score, determine_pet_mood, PetMood};
pub use grade::{
    calculate_health_grade, Grade, GradeInputs, HealthGradeResult, NutritionGap, QuestItem,
    QuestStatus, ScoreBreakdown,
};
pub use macros::{analyze_macro_balance, MacroAnalysis, MacroQuality};
pub use projection::{
    calculate_metabolic_split, calculate_weekly_balance, calculate_weight_projection,
    BalanceStatus, MetabolicSplit, ProjectionStatus, WeeklyBalance, WeightProjection,
};
pub use tips::{generate_health_tip, HealthTip, TipKind};

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
