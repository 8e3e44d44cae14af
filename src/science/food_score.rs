//! Per-food health score and pet mood
//!
//! The score rewards protein and fiber density and penalises sugar, fat and
//! sodium relative to the food's calories. The mascot's mood is derived from
//! the day's intake and the average score of what was eaten.

use serde::{Deserialize, Serialize};

use crate::models::Nutrition;

const BASELINE_SCORE: f64 = 50.0;
const PROTEIN_DENSITY_WEIGHT: f64 = 200.0;
const FIBER_DENSITY_WEIGHT: f64 = 500.0;
const SUGAR_DENSITY_WEIGHT: f64 = 300.0;
const FAT_DENSITY_WEIGHT: f64 = 100.0;
/// Points lost per gram of sodium
const SODIUM_POINTS_PER_G: f64 = 10.0;

/// Score one food from 0 to 100.
///
/// Foods without calories only take the sodium penalty.
pub fn calculate_food_health_score(nutrition: &Nutrition) -> u32 {
    let n = nutrition.sanitized();
    let mut score = BASELINE_SCORE;

    if n.calories > 0.0 {
        score += n.protein / n.calories * PROTEIN_DENSITY_WEIGHT;
        score += n.fiber / n.calories * FIBER_DENSITY_WEIGHT;
        score -= n.sugar / n.calories * SUGAR_DENSITY_WEIGHT;
        score -= n.fat / n.calories * FAT_DENSITY_WEIGHT;
    }
    score -= n.sodium / 1000.0 * SODIUM_POINTS_PER_G;

    score.round().clamp(0.0, 100.0) as u32
}

/// Mascot mood shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PetMood {
    Happy,
    Normal,
    Sad,
}

pub fn determine_pet_mood(calories_eaten: f64, target: f64, average_health_score: f64) -> PetMood {
    if calories_eaten <= target + 100.0 && average_health_score > 75.0 {
        PetMood::Happy
    } else if calories_eaten > target + 500.0 || average_health_score < 40.0 {
        PetMood::Sad
    } else {
        PetMood::Normal
    }
}
